//! In-memory paper catalog backing the search endpoints.

use std::path::{Path, PathBuf};

use iqps_core::{QuestionPaper, SearchResult, sample_papers};

const DEFAULT_SEARCH_LIMIT: usize = 100;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("invalid catalog config: {0}")]
    InvalidConfig(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// The built-in sample papers.
    Builtin,
    /// A JSON array of papers on disk.
    File(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    pub source: CatalogSource,
    /// Maximum number of results returned by one search.
    pub search_limit: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            source: CatalogSource::Builtin,
            search_limit: DEFAULT_SEARCH_LIMIT,
        }
    }
}

impl CatalogConfig {
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            source: CatalogSource::File(path.into()),
            ..Default::default()
        }
    }

    /// Build a config from environment variables.
    ///
    /// - `IQPS_CATALOG_PATH`: JSON file of papers (default: built-in samples)
    /// - `IQPS_SEARCH_LIMIT`: max results per search (default: 100)
    pub fn from_env() -> Result<Self, CatalogError> {
        Self::from_vars(
            std::env::var("IQPS_CATALOG_PATH").ok(),
            std::env::var("IQPS_SEARCH_LIMIT").ok(),
        )
    }

    fn from_vars(path: Option<String>, limit: Option<String>) -> Result<Self, CatalogError> {
        let source = match path.and_then(non_empty) {
            Some(path) => CatalogSource::File(PathBuf::from(path)),
            None => CatalogSource::Builtin,
        };

        let search_limit = match limit.and_then(non_empty) {
            Some(raw) => raw.parse().map_err(|_| {
                CatalogError::InvalidConfig(format!(
                    "IQPS_SEARCH_LIMIT={raw} is not a positive integer"
                ))
            })?,
            None => DEFAULT_SEARCH_LIMIT,
        };
        if search_limit == 0 {
            return Err(CatalogError::InvalidConfig(
                "IQPS_SEARCH_LIMIT must be greater than zero".to_string(),
            ));
        }

        Ok(Self {
            source,
            search_limit,
        })
    }
}

#[derive(Debug, Clone)]
pub struct Catalog {
    papers: Vec<QuestionPaper>,
    search_limit: usize,
}

impl Catalog {
    pub fn new(papers: Vec<QuestionPaper>, search_limit: usize) -> Self {
        Self {
            papers,
            search_limit,
        }
    }

    pub fn load(cfg: &CatalogConfig) -> Result<Self, CatalogError> {
        let papers = match &cfg.source {
            CatalogSource::Builtin => sample_papers(),
            CatalogSource::File(path) => read_papers(path)?,
        };
        tracing::info!("Loaded {} papers from {:?}", papers.len(), cfg.source);
        Ok(Self::new(papers, cfg.search_limit))
    }

    pub fn papers(&self) -> &[QuestionPaper] {
        &self.papers
    }

    /// Papers whose course name or code contains `query`, ignoring case.
    ///
    /// `exam`, when given, must equal the paper's exam (ignoring case).
    pub fn search(&self, query: &str, exam: Option<&str>) -> Vec<SearchResult> {
        let query = query.trim().to_lowercase();
        let exam = exam.map(str::trim).filter(|e| !e.is_empty());

        self.papers
            .iter()
            .filter(|p| p.matches(&query))
            .filter(|p| exam.is_none_or(|e| p.exam.eq_ignore_ascii_case(e)))
            .take(self.search_limit)
            .map(QuestionPaper::to_search_result)
            .collect()
    }
}

fn read_papers(path: &Path) -> Result<Vec<QuestionPaper>, CatalogError> {
    let raw = std::fs::read_to_string(path)?;
    Ok(iqps_core::parse_papers(&raw)?)
}

fn non_empty(s: String) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::disallowed_methods)]

    use super::*;

    #[test]
    fn env_defaults_to_builtin() -> Result<(), CatalogError> {
        let cfg = CatalogConfig::from_vars(None, Some("  ".to_string()))?;
        assert_eq!(cfg, CatalogConfig::default());
        Ok(())
    }

    #[test]
    fn env_rejects_bad_limit() {
        let err = CatalogConfig::from_vars(None, Some("lots".to_string())).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidConfig(_)));
        assert!(CatalogConfig::from_vars(None, Some("0".to_string())).is_err());
    }

    #[test]
    fn search_matches_name_or_code_and_filters_exam() -> Result<(), CatalogError> {
        let catalog = Catalog::load(&CatalogConfig::default())?;

        let maths = catalog.search("  MATHEMATICS ", None);
        assert_eq!(maths.len(), 3);

        let by_code = catalog.search("cs21001", None);
        assert_eq!(by_code.len(), 1);
        assert_eq!(by_code[0].course_name, "Discrete Structures");

        let midsem = catalog.search("mathematics", Some("MIDSEM"));
        assert_eq!(midsem.len(), 1);
        assert_eq!(midsem[0].year, 2022);

        assert!(catalog.search("", None).is_empty());
        Ok(())
    }

    #[test]
    fn listing_and_search_share_one_catalog() -> Result<(), CatalogError> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("papers.json");
        let papers = vec![
            QuestionPaper::new("HS20001", "Economics", 2018, "econ.pdf").with_exam("endsem"),
            QuestionPaper::new("HS20002", "Economics Lab", 2019, "econ-lab.pdf"),
        ];
        std::fs::write(&path, serde_json::to_string(&papers)?)?;

        let catalog = Catalog::load(&CatalogConfig::file(&path))?;
        let listed: Vec<SearchResult> = catalog
            .papers()
            .iter()
            .map(QuestionPaper::to_search_result)
            .collect();
        let found = catalog.search("econ", None);
        assert_eq!(found, listed);
        assert!(catalog.papers().iter().all(|p| p.course_code.starts_with("HS")));
        Ok(())
    }

    #[test]
    fn search_respects_limit() {
        let catalog = Catalog::new(sample_papers(), 2);
        assert_eq!(catalog.search("m", None).len(), 2);
    }

    #[test]
    fn loads_papers_from_json_file() -> Result<(), CatalogError> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("papers.json");
        let papers = vec![QuestionPaper::new("HS20001", "Economics", 2018, "econ.pdf")];
        std::fs::write(&path, serde_json::to_string(&papers)?)?;

        let catalog = Catalog::load(&CatalogConfig::file(&path))?;
        assert_eq!(catalog.papers(), papers.as_slice());
        assert_eq!(catalog.search("econ", None)[0].year, 2018);
        Ok(())
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = Catalog::load(&CatalogConfig::file("/nonexistent/papers.json")).unwrap_err();
        assert!(matches!(err, CatalogError::Io(_)));
    }
}
