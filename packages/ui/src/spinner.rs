use dioxus::prelude::*;

/// Loading indicator.
#[component]
pub fn Spinner() -> Element {
    rsx! {
        div { class: "spinner",
            div { class: "spinner-ring" }
        }
    }
}
