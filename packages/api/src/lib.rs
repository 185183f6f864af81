//! Server API functions for question paper search.
//!
//! This crate contains all shared fullstack server functions for:
//! - Searching papers by course name or code
//! - Listing the paper catalog

mod catalog;
mod papers;

pub use catalog::{Catalog, CatalogConfig, CatalogError, CatalogSource};
pub use papers::*;

// Re-export core types for convenience
pub use iqps_core::{QuestionPaper, SearchResult};

#[cfg(feature = "server")]
static CATALOG: tokio::sync::OnceCell<Catalog> = tokio::sync::OnceCell::const_new();

/// Shared catalog, loaded from the environment on first use.
#[cfg(feature = "server")]
pub async fn catalog() -> Result<&'static Catalog, CatalogError> {
    CATALOG
        .get_or_try_init(|| async { Catalog::load(&CatalogConfig::from_env()?) })
        .await
}
