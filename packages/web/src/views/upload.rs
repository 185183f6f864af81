use dioxus::prelude::*;

/// Placeholder for the paper upload flow.
#[component]
pub fn Upload() -> Element {
    rsx! {
        div { class: "page-container",
            h1 { class: "page-title", "Upload" }
            p { class: "page-description", "Paper uploads are not open yet." }
        }
    }
}
