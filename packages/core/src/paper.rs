//! Question paper records and their search-result projection.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// Exam value meaning "no tag".
pub const UNKNOWN_EXAM: &str = "unknown";

/// Unique identifier for a question paper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaperId(pub Ulid);

impl PaperId {
    /// Create a new unique paper ID.
    pub fn new() -> Self {
        Self(Ulid::new())
    }

    /// Parse a paper ID from a string.
    pub fn parse(s: &str) -> Result<Self, ulid::DecodeError> {
        Ok(Self(Ulid::from_string(s)?))
    }
}

impl Default for PaperId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for PaperId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One question paper as returned by a search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub year: i32,
    pub course_name: String,
    /// Exam kind, or [`UNKNOWN_EXAM`].
    pub exam: String,
    /// Link to the PDF.
    pub filelink: String,
}

impl SearchResult {
    pub fn new(
        year: i32,
        course_name: impl Into<String>,
        exam: impl Into<String>,
        filelink: impl Into<String>,
    ) -> Self {
        Self {
            year,
            course_name: course_name.into(),
            exam: exam.into(),
            filelink: filelink.into(),
        }
    }

    /// Short tag shown next to the course name, if any.
    pub fn exam_tag(&self) -> Option<String> {
        exam_tag(&self.exam)
    }
}

/// Drops the three-letter exam prefix and upper-cases the rest.
///
/// Returns `None` for an empty exam, the `"unknown"` sentinel, or a value
/// with nothing left after the prefix.
pub fn exam_tag(exam: &str) -> Option<String> {
    if exam.is_empty() || exam == UNKNOWN_EXAM {
        return None;
    }
    let tag: String = exam.chars().skip(3).collect::<String>().to_uppercase();
    if tag.is_empty() { None } else { Some(tag) }
}

/// A stored question paper, as listed on the admin page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionPaper {
    pub id: PaperId,
    pub course_code: String,
    pub course_name: String,
    pub year: i32,
    #[serde(default = "unknown_exam")]
    pub exam: String,
    pub filelink: String,
    pub uploaded_at: DateTime<Utc>,
}

fn unknown_exam() -> String {
    UNKNOWN_EXAM.to_string()
}

impl QuestionPaper {
    /// Create a new paper with an unknown exam.
    pub fn new(
        course_code: impl Into<String>,
        course_name: impl Into<String>,
        year: i32,
        filelink: impl Into<String>,
    ) -> Self {
        Self {
            id: PaperId::new(),
            course_code: course_code.into(),
            course_name: course_name.into(),
            year,
            exam: unknown_exam(),
            filelink: filelink.into(),
            uploaded_at: Utc::now(),
        }
    }

    /// Set the exam kind.
    pub fn with_exam(mut self, exam: impl Into<String>) -> Self {
        self.exam = exam.into();
        self
    }

    /// Set the upload time.
    pub fn with_uploaded_at(mut self, uploaded_at: DateTime<Utc>) -> Self {
        self.uploaded_at = uploaded_at;
        self
    }

    /// Case-insensitive substring match on course name or code.
    ///
    /// `query` must already be trimmed and lower-cased; an empty query never matches.
    pub fn matches(&self, query: &str) -> bool {
        !query.is_empty()
            && (self.course_name.to_lowercase().contains(query)
                || self.course_code.to_lowercase().contains(query))
    }

    pub fn exam_tag(&self) -> Option<String> {
        exam_tag(&self.exam)
    }

    /// Project this paper to the shape used by search results.
    pub fn to_search_result(&self) -> SearchResult {
        SearchResult {
            year: self.year,
            course_name: self.course_name.clone(),
            exam: self.exam.clone(),
            filelink: self.filelink.clone(),
        }
    }
}

/// Parse a JSON array of papers.
pub fn parse_papers(json: &str) -> Result<Vec<QuestionPaper>, serde_json::Error> {
    serde_json::from_str(json)
}

/// Built-in papers used by the admin lister and as the default catalog.
pub fn sample_papers() -> Vec<QuestionPaper> {
    let uploaded = |y, m, d| {
        Utc.with_ymd_and_hms(y, m, d, 10, 0, 0)
            .single()
            .unwrap_or_else(Utc::now)
    };
    let link = |name: &str| format!("https://static.metakgp.org/peqp/{name}.pdf");

    vec![
        QuestionPaper::new("MA10001", "Mathematics I", 2023, link("MA10001_2023_endsem"))
            .with_exam("endsem")
            .with_uploaded_at(uploaded(2023, 12, 4)),
        QuestionPaper::new("MA10001", "Mathematics I", 2022, link("MA10001_2022_midsem"))
            .with_exam("midsem")
            .with_uploaded_at(uploaded(2022, 9, 28)),
        QuestionPaper::new("MA10002", "Mathematics II", 2023, link("MA10002_2023_endsem"))
            .with_exam("endsem")
            .with_uploaded_at(uploaded(2023, 5, 2)),
        QuestionPaper::new("CS10003", "Programming and Data Structures", 2021, link("CS10003_2021"))
            .with_uploaded_at(uploaded(2021, 11, 30)),
        QuestionPaper::new("CS21001", "Discrete Structures", 2022, link("CS21001_2022_endsem"))
            .with_exam("endsem")
            .with_uploaded_at(uploaded(2022, 11, 24)),
        QuestionPaper::new("PH11003", "Physics of Waves", 2019, link("PH11003_2019_midsem"))
            .with_exam("midsem")
            .with_uploaded_at(uploaded(2019, 9, 20)),
        QuestionPaper::new("EE11003", "Electrical Technology", 2020, link("EE11003_2020"))
            .with_uploaded_at(uploaded(2020, 3, 3)),
        QuestionPaper::new("BS20001", "Science of Living Systems", 2021, link("BS20001_2021_endsem"))
            .with_exam("endsem")
            .with_uploaded_at(uploaded(2021, 4, 26)),
    ]
}

#[cfg(test)]
mod tests {
    #![allow(clippy::disallowed_methods)]

    use super::*;

    #[test]
    fn exam_tag_drops_prefix_and_uppercases() {
        assert_eq!(exam_tag("endsem"), Some("SEM".to_string()));
        assert_eq!(exam_tag("ct-quiz"), Some("QUIZ".to_string()));
    }

    #[test]
    fn exam_tag_hidden_for_sentinel_and_short_values() {
        assert_eq!(exam_tag(""), None);
        assert_eq!(exam_tag(UNKNOWN_EXAM), None);
        assert_eq!(exam_tag("mid"), None);
    }

    #[test]
    fn matches_course_name_or_code() {
        let paper = QuestionPaper::new("MA10001", "Mathematics I", 2023, "x.pdf");
        assert!(paper.matches("math"));
        assert!(paper.matches("ma100"));
        assert!(!paper.matches("physics"));
        assert!(!paper.matches(""));
    }

    #[test]
    fn missing_exam_defaults_to_unknown() {
        let json = r#"[{
            "id": "01ARZ3NDEKTSV4RRFFQ69G5FAV",
            "course_code": "CS10003",
            "course_name": "Programming and Data Structures",
            "year": 2021,
            "filelink": "https://example.org/pds.pdf",
            "uploaded_at": "2021-11-30T10:00:00Z"
        }]"#;
        let papers = parse_papers(json).unwrap();
        assert_eq!(papers.len(), 1);
        assert_eq!(papers[0].exam, UNKNOWN_EXAM);
        assert_eq!(papers[0].exam_tag(), None);
    }

    #[test]
    fn sample_papers_have_unique_ids() {
        let papers = sample_papers();
        let mut ids: Vec<_> = papers.iter().map(|p| p.id).collect();
        ids.sort_by_key(|id| id.0);
        ids.dedup();
        assert_eq!(ids.len(), papers.len());
    }
}
