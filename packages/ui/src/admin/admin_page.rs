//! Admin landing page.

use dioxus::prelude::*;

use super::PaperLister;
use crate::auth::use_auth;

/// Admin landing page; redirects to `/oauth` when nobody is signed in.
#[component]
pub fn AdminPage() -> Element {
    let mut auth = use_auth();
    let nav = use_navigator();

    use_effect(move || {
        if !auth.is_authenticated() {
            tracing::debug!("Not signed in, redirecting to /oauth");
            nav.push("/oauth");
        }
    });

    // Same catalog the search endpoint serves
    let papers_resource = use_resource(move || async move { api::list_papers().await });
    let (papers, error) = match papers_resource.read().as_ref() {
        Some(Ok(p)) => (p.clone(), None),
        Some(Err(e)) => (Vec::new(), Some(format!("Failed to load papers: {}", e))),
        None => (Vec::new(), None),
    };
    let loading = papers_resource.read().is_none();
    let user = auth.user().unwrap_or_else(|| "User".to_string());

    rsx! {
        div { class: "admin-page",
            div { class: "title",
                header {
                    a { href: "#", class: "admin", "IQPS Admin Page" }
                    Link { to: "/", class: "search", "Search" }
                    Link { to: "/upload", class: "upload", "Upload" }
                    span { class: "user", "Welcome {user}" }
                    button {
                        class: "btn btn-small",
                        onclick: move |_| auth.sign_out(),
                        "Sign out"
                    }
                }
            }
            if let Some(err) = error {
                div { class: "error-banner",
                    span { "{err}" }
                }
            }
            div {
                PaperLister { papers, loading }
            }
        }
    }
}
