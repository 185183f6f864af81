//! Core domain types for question paper search.
//!
//! This crate contains shared types used across all packages:
//! - SearchResult and QuestionPaper records
//! - ViewState for the result list's filter and sort controls
//! - Pure derivation of the displayed list and its status

mod paper;
mod reconcile;
mod status;
mod view;

pub use paper::{
    PaperId, QuestionPaper, SearchResult, UNKNOWN_EXAM, exam_tag, parse_papers, sample_papers,
};
pub use reconcile::{
    DerivedState, available_years, compare_course_names, display_results, row_keys,
};
pub use status::DisplayStatus;
pub use view::{ALL_YEARS, EffectiveSort, FilterField, ParseViewError, SortBy, SortOrder, ViewState};
