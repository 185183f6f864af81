//! User-controlled filter and sort state for a result list.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::paper::SearchResult;
use crate::reconcile::available_years;

/// Select value meaning "all years".
pub const ALL_YEARS: &str = "null";

/// Error returned when a control value cannot be applied.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseViewError {
    #[error("unknown sort key: {0} (expected year|course_name)")]
    SortBy(String),

    #[error("unknown sort order: {0} (expected ascending|descending)")]
    SortOrder(String),

    #[error("unknown filter field: {0}")]
    Field(String),
}

/// Key the result list is sorted by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortBy {
    #[default]
    Year,
    CourseName,
}

impl SortBy {
    pub fn as_str(self) -> &'static str {
        match self {
            SortBy::Year => "year",
            SortBy::CourseName => "course_name",
        }
    }
}

impl std::fmt::Display for SortBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortBy {
    type Err = ParseViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "year" => Ok(SortBy::Year),
            "course_name" => Ok(SortBy::CourseName),
            other => Err(ParseViewError::SortBy(other.to_string())),
        }
    }
}

/// Direction of the sort.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    Ascending,
    #[default]
    Descending,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Ascending => "ascending",
            SortOrder::Descending => "descending",
        }
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = ParseViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ascending" => Ok(SortOrder::Ascending),
            "descending" => Ok(SortOrder::Descending),
            other => Err(ParseViewError::SortOrder(other.to_string())),
        }
    }
}

/// Which filter control changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterField {
    FilterByYear,
    SortBy,
    SortOrder,
}

impl FromStr for FilterField {
    type Err = ParseViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "filter_by_year" => Ok(FilterField::FilterByYear),
            "sort_by" => Ok(FilterField::SortBy),
            "sort_order" => Ok(FilterField::SortOrder),
            other => Err(ParseViewError::Field(other.to_string())),
        }
    }
}

/// Sort key and order actually applied to the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EffectiveSort {
    pub sort_by: SortBy,
    pub sort_order: SortOrder,
}

/// Filter and sort selections held by the result view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ViewState {
    pub filter_by_year: Option<i32>,
    pub sort_by: SortBy,
    pub sort_order: SortOrder,
}

impl ViewState {
    /// Apply a raw `<select>` value to one field.
    ///
    /// A year value that is not an integer clears the year filter. Unknown
    /// sort values are rejected and leave the state untouched.
    pub fn update(&mut self, field: FilterField, value: &str) -> Result<(), ParseViewError> {
        match field {
            FilterField::FilterByYear => self.filter_by_year = parse_year(value),
            FilterField::SortBy => self.sort_by = value.parse()?,
            FilterField::SortOrder => self.sort_order = value.parse()?,
        }
        Ok(())
    }

    /// Sorting by year is a no-op once a single year is selected, so that
    /// combination falls back to course name ascending.
    pub fn effective_sort(&self) -> EffectiveSort {
        if self.sort_by == SortBy::Year && self.filter_by_year.is_some() {
            EffectiveSort {
                sort_by: SortBy::CourseName,
                sort_order: SortOrder::Ascending,
            }
        } else {
            EffectiveSort {
                sort_by: self.sort_by,
                sort_order: self.sort_order,
            }
        }
    }

    /// Drop a year filter that no longer matches any available year.
    pub fn reconcile(mut self, available_years: &[i32]) -> Self {
        if let Some(year) = self.filter_by_year {
            if !available_years.contains(&year) {
                self.filter_by_year = None;
            }
        }
        self
    }

    /// State to keep once a new result list arrives.
    ///
    /// A selected year missing from `results` is cleared for good, so it does
    /// not come back when a later list contains that year again.
    pub fn for_results(self, results: &[SearchResult]) -> Self {
        self.reconcile(&available_years(results))
    }

    /// Value for the year `<select>`.
    pub fn year_select_value(&self) -> String {
        match self.filter_by_year {
            Some(year) => year.to_string(),
            None => ALL_YEARS.to_string(),
        }
    }
}

fn parse_year(value: &str) -> Option<i32> {
    value.trim().parse().ok()
}
