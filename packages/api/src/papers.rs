//! Question paper server functions.

use dioxus::prelude::*;
use iqps_core::{QuestionPaper, SearchResult};

/// Search papers by course name or code.
#[get("/api/search")]
pub async fn search_papers(
    query: String,
    exam: Option<String>,
) -> Result<Vec<SearchResult>, ServerFnError> {
    #[cfg(feature = "server")]
    {
        if query.trim().is_empty() {
            return Err(ServerFnError::new("Enter a course name or code to search"));
        }

        let catalog = crate::catalog()
            .await
            .map_err(|e| ServerFnError::new(format!("Catalog unavailable: {}", e)))?;

        let results = catalog.search(&query, exam.as_deref());
        tracing::debug!(query = %query, exam = ?exam, hits = results.len(), "search");
        Ok(results)
    }

    #[cfg(not(feature = "server"))]
    {
        let _ = (query, exam);
        Err(ServerFnError::new("Server-only function"))
    }
}

/// List every paper in the catalog.
#[get("/api/papers")]
pub async fn list_papers() -> Result<Vec<QuestionPaper>, ServerFnError> {
    #[cfg(feature = "server")]
    {
        let catalog = crate::catalog()
            .await
            .map_err(|e| ServerFnError::new(format!("Catalog unavailable: {}", e)))?;
        Ok(catalog.papers().to_vec())
    }

    #[cfg(not(feature = "server"))]
    {
        Err(ServerFnError::new("Server-only function"))
    }
}
