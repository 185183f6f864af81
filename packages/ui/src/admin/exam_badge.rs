//! Exam kind badge.

use dioxus::prelude::*;
use iqps_core::exam_tag;

/// Badge for displaying which exam a paper is from.
#[component]
pub fn ExamBadge(exam: String) -> Element {
    let (bg_class, text) = match exam.as_str() {
        "midsem" => ("badge-midsem", "Mid Sem".to_string()),
        "endsem" => ("badge-endsem", "End Sem".to_string()),
        other => ("badge-default", exam_tag(other).unwrap_or_else(|| "-".to_string())),
    };

    rsx! {
        span {
            class: "exam-badge {bg_class}",
            {text}
        }
    }
}
