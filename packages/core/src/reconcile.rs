//! Derivation of the displayed list from the full result set.
//!
//! Everything here is a pure function of `(results, view)`; the UI re-runs it
//! whenever either input changes instead of patching the previous output.

use std::cmp::Ordering;
use std::collections::{BTreeSet, HashMap};

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::paper::SearchResult;
use crate::view::{SortBy, SortOrder, ViewState};

/// State computed from a result list and the current view selections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedState {
    /// Distinct years in the unfiltered results, newest first.
    pub available_years: Vec<i32>,
    /// Filtered and sorted copy of the results.
    pub displayed_results: Vec<SearchResult>,
}

impl DerivedState {
    pub fn derive(results: &[SearchResult], view: &ViewState) -> Self {
        Self {
            available_years: available_years(results),
            displayed_results: display_results(results, view),
        }
    }
}

/// Distinct years, sorted descending.
pub fn available_years(results: &[SearchResult]) -> Vec<i32> {
    let years: BTreeSet<i32> = results.iter().map(|r| r.year).collect();
    years.into_iter().rev().collect()
}

/// Filter by the selected year, then stable-sort by the effective sort.
pub fn display_results(results: &[SearchResult], view: &ViewState) -> Vec<SearchResult> {
    let mut displayed: Vec<SearchResult> = match view.filter_by_year {
        Some(year) => results.iter().filter(|r| r.year == year).cloned().collect(),
        None => results.to_vec(),
    };

    let sort = view.effective_sort();
    displayed.sort_by(|a, b| {
        let (first, second) = match sort.sort_order {
            SortOrder::Ascending => (a, b),
            SortOrder::Descending => (b, a),
        };
        match sort.sort_by {
            SortBy::Year => first.year.cmp(&second.year),
            SortBy::CourseName => compare_course_names(&first.course_name, &second.course_name),
        }
    });

    displayed
}

/// Collation used for course names.
///
/// A fixed, locale-independent approximation of root-locale ordering,
/// compared level by level:
/// 1. base letters, ignoring case and diacritics (`"Économie" < "Zoology"`)
/// 2. diacritics, unaccented first (`"Economie" < "Économie"`)
/// 3. case, lowercase first (`"maths" < "Maths"`)
/// 4. raw code points
pub fn compare_course_names(a: &str, b: &str) -> Ordering {
    let base = |s: &str| -> Vec<char> {
        s.nfd()
            .filter(|c| !is_combining_mark(*c))
            .flat_map(char::to_lowercase)
            .collect()
    };
    let accents = |s: &str| -> Vec<char> { s.nfd().flat_map(char::to_lowercase).collect() };

    base(a)
        .cmp(&base(b))
        .then_with(|| accents(a).cmp(&accents(b)))
        .then_with(|| {
            a.chars()
                .zip(b.chars())
                .map(|(x, y)| x.is_uppercase().cmp(&y.is_uppercase()))
                .find(|ord| ord.is_ne())
                .unwrap_or(Ordering::Equal)
        })
        .then_with(|| a.cmp(b))
}

/// Stable render keys for a list of results.
///
/// Keyed by file link so rows survive a re-sort; a repeated link gets its
/// occurrence number appended.
pub fn row_keys(results: &[SearchResult]) -> Vec<String> {
    let mut seen: HashMap<&str, usize> = HashMap::new();
    results
        .iter()
        .map(|r| {
            let count = seen.entry(r.filelink.as_str()).or_insert(0);
            *count += 1;
            if *count == 1 {
                r.filelink.clone()
            } else {
                format!("{}#{}", r.filelink, count)
            }
        })
        .collect()
}
