//! Result list with client-side filter and sort controls.

use dioxus::prelude::*;
use iqps_core::{DerivedState, DisplayStatus, FilterField, SearchResult, ViewState, row_keys};

use super::{ResultCard, ResultsFilter};
use crate::Spinner;

/// Props for SearchResults component.
#[derive(Props, Clone, PartialEq)]
pub struct SearchResultsProps {
    /// A search is in flight.
    pub awaiting_results: bool,
    /// Whether the last search succeeded.
    pub success: bool,
    /// Message shown when the search failed.
    #[props(into, default)]
    pub msg: String,
    /// Full, unfiltered results.
    pub results: Vec<SearchResult>,
}

/// Result table with year filter and sort selectors.
///
/// The displayed list is re-derived from `results` and the local
/// [`ViewState`] on every render. A year filter absent from a new list is
/// cleared and stays cleared.
#[component]
pub fn SearchResults(props: SearchResultsProps) -> Element {
    let mut view_state = use_signal(ViewState::default);

    // A fresh result list may not contain the selected year any more. The
    // cleared filter is written back so a later list cannot revive it.
    let results = props.results.clone();
    use_effect(use_reactive!(|(results,)| {
        let current = *view_state.peek();
        let next = current.for_results(&results);
        if next != current {
            tracing::debug!("Clearing year filter missing from new results");
            view_state.set(next);
        }
    }));

    let view = view_state().for_results(&props.results);
    let derived = DerivedState::derive(&props.results, &view);
    let keys = row_keys(&derived.displayed_results);

    let on_update = move |(field, value): (FilterField, String)| {
        let mut next = view;
        match next.update(field, &value) {
            Ok(()) => {
                tracing::debug!(?field, value = %value, "result filter changed");
                view_state.set(next);
            }
            Err(e) => tracing::warn!("Ignoring filter input: {}", e),
        }
    };

    let status = DisplayStatus::from_flags(
        props.awaiting_results,
        props.success,
        &props.msg,
        props.results.len(),
    );

    let body = match status {
        DisplayStatus::Loading => rsx! {
            div { class: "spinner", Spinner {} }
        },
        DisplayStatus::Failed(msg) => rsx! {
            p { class: "message", "{msg}" }
        },
        DisplayStatus::Empty => rsx! {},
        DisplayStatus::Ready => rsx! {
            ResultsFilter {
                view,
                available_years: derived.available_years.clone(),
                on_update,
            }

            table { class: "search-results-table",
                thead {
                    tr {
                        th { "Year" }
                        th { "Course Name" }
                    }
                }
                tbody {
                    for (key, result) in keys.iter().zip(derived.displayed_results.iter()) {
                        ResultCard {
                            key: "{key}",
                            result: result.clone(),
                        }
                    }
                }
            }
        },
    };

    rsx! {
        div { class: "search-results", {body} }
    }
}
