//! Paper row component for displaying a single paper in a table.

use dioxus::prelude::*;
use iqps_core::QuestionPaper;

use super::ExamBadge;

/// Props for PaperRow component.
#[derive(Props, Clone, PartialEq)]
pub struct PaperRowProps {
    /// The paper to display.
    pub paper: QuestionPaper,
}

/// Table row component for displaying a single paper.
#[component]
pub fn PaperRow(props: PaperRowProps) -> Element {
    let paper = props.paper.clone();
    let uploaded = paper.uploaded_at.format("%Y-%m-%d %H:%M").to_string();

    rsx! {
        tr { class: "paper-row",
            td { class: "paper-year", "{paper.year}" }
            td { class: "paper-code", "{paper.course_code}" }
            td { class: "paper-name", "{paper.course_name}" }
            td { class: "paper-exam",
                ExamBadge { exam: paper.exam.clone() }
            }
            td { class: "paper-uploaded", "{uploaded}" }
            td { class: "paper-actions",
                a {
                    class: "btn btn-small",
                    href: "{paper.filelink}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "Open PDF"
                }
            }
        }
    }
}
