//! Table row for a single search result.

use dioxus::prelude::*;
use iqps_core::SearchResult;

use crate::copy_link;

/// Props for ResultCard component.
#[derive(Props, Clone, PartialEq)]
pub struct ResultCardProps {
    pub result: SearchResult,
}

#[component]
pub fn ResultCard(props: ResultCardProps) -> Element {
    let result = props.result.clone();
    let tag = result.exam_tag();
    let link_for_share = result.filelink.clone();

    rsx! {
        tr { class: "result-card",
            td { "{result.year}" }
            td { class: "result-card-body",
                p {
                    "{result.course_name}\u{a0}"
                    if let Some(tag) = tag {
                        span { class: "result-card-tag", "{tag}" }
                    }
                }
                div { class: "result-card-btns",
                    a {
                        class: "result-card-btn icon-btn",
                        href: "{result.filelink}",
                        title: "Open PDF",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "PDF"
                    }
                    button {
                        class: "result-card-btn icon-btn",
                        title: "Share PDF",
                        onclick: move |e| {
                            e.stop_propagation();
                            copy_link(link_for_share.clone());
                        },
                        "🔗"
                    }
                }
            }
        }
    }
}
