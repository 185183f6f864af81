//! Search form that feeds [`SearchResults`].

use dioxus::prelude::*;
use iqps_core::SearchResult;

use super::{SearchResults, Select, SelectOption};

/// Search page: query form plus the result list.
#[component]
pub fn SearchPage() -> Element {
    let mut query = use_signal(String::new);
    let mut exam = use_signal(String::new);
    let mut awaiting_results = use_signal(|| false);
    let mut success = use_signal(|| true);
    let mut msg = use_signal(String::new);
    let mut results = use_signal(Vec::<SearchResult>::new);

    let on_search = move |e: FormEvent| {
        e.prevent_default();
        let q = query().trim().to_string();
        let exam_filter = Some(exam()).filter(|value| !value.is_empty());

        spawn(async move {
            awaiting_results.set(true);
            match api::search_papers(q.clone(), exam_filter).await {
                Ok(found) if found.is_empty() => {
                    success.set(false);
                    msg.set(format!("No papers found for \"{}\".", q));
                    results.set(Vec::new());
                }
                Ok(found) => {
                    success.set(true);
                    msg.set(String::new());
                    results.set(found);
                }
                Err(e) => {
                    tracing::warn!("Search failed: {}", e);
                    success.set(false);
                    msg.set(format!("Search failed: {}", e));
                    results.set(Vec::new());
                }
            }
            awaiting_results.set(false);
        });
    };

    rsx! {
        div { class: "search-page",
            form { class: "search-form",
                onsubmit: on_search,
                input {
                    r#type: "text",
                    placeholder: "Course name or code",
                    value: "{query}",
                    oninput: move |e| query.set(e.value()),
                }
                Select {
                    value: exam(),
                    options: vec![
                        SelectOption::new("", "All Exams"),
                        SelectOption::new("midsem", "Mid Semester"),
                        SelectOption::new("endsem", "End Semester"),
                    ],
                    on_input: move |value| exam.set(value),
                }
                button { class: "btn btn-primary", r#type: "submit", "Search" }
            }

            SearchResults {
                awaiting_results: awaiting_results(),
                success: success(),
                msg: msg(),
                results: results(),
            }
        }
    }
}
