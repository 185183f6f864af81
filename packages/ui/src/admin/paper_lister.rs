//! Paper list component for the admin page.

use dioxus::prelude::*;
use iqps_core::QuestionPaper;

use super::PaperRow;

/// Props for PaperLister component.
#[derive(Props, Clone, PartialEq)]
pub struct PaperListerProps {
    /// Papers to display.
    pub papers: Vec<QuestionPaper>,
    /// Whether loading.
    #[props(default = false)]
    pub loading: bool,
}

/// Table of question papers.
#[component]
pub fn PaperLister(props: PaperListerProps) -> Element {
    rsx! {
        div { class: "paper-list",
            if props.loading {
                div { class: "loading", "Loading papers..." }
            } else if props.papers.is_empty() {
                div { class: "empty-state",
                    p { "No question papers to review" }
                }
            } else {
                table { class: "data-table",
                    thead {
                        tr {
                            th { "Year" }
                            th { "Code" }
                            th { "Course Name" }
                            th { "Exam" }
                            th { "Uploaded" }
                            th { "" }
                        }
                    }
                    tbody {
                        for paper in props.papers.iter() {
                            PaperRow {
                                key: "{paper.id}",
                                paper: paper.clone(),
                            }
                        }
                    }
                }
            }
        }
    }
}
