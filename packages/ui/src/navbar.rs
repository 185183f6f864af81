use dioxus::prelude::*;

/// Top navigation bar; links are supplied by the platform crate.
#[component]
pub fn Navbar(children: Element) -> Element {
    rsx! {
        div {
            id: "navbar",
            {children}
        }
    }
}
