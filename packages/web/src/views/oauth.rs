use dioxus::prelude::*;
use ui::auth::use_auth;

use crate::Route;

/// Sign-in page the admin page redirects to.
///
/// Takes a display name only; there is no identity provider behind it.
#[component]
pub fn OAuth() -> Element {
    let mut auth = use_auth();
    let nav = use_navigator();
    let mut name = use_signal(String::new);

    rsx! {
        div { class: "page-container",
            h1 { class: "page-title", "Sign in" }
            form {
                onsubmit: move |e: FormEvent| {
                    e.prevent_default();
                    let user = name().trim().to_string();
                    if !user.is_empty() {
                        auth.sign_in(user);
                        nav.push(Route::Admin {});
                    }
                },
                input {
                    r#type: "text",
                    placeholder: "Your name",
                    value: "{name}",
                    oninput: move |e| name.set(e.value()),
                }
                button { class: "btn btn-primary", r#type: "submit", "Continue" }
            }
        }
    }
}
