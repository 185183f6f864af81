// Dioxus `rsx!` macro expands to unwraps internally; allow to avoid false positives.
#![allow(clippy::disallowed_methods)]

use dioxus::prelude::*;

use ui::Navbar;
use ui::admin::AdminPage;
use ui::auth::use_auth_provider;
use ui::search::SearchPage;
use views::{OAuth, Upload};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    // Public routes
    #[layout(WebNavbar)]
        #[route("/")]
        Search {},
        #[route("/upload")]
        Upload {},
        #[route("/oauth")]
        OAuth {},
    #[end_layout]

    // Admin page carries its own header
    #[route("/admin")]
    Admin {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");
const ADMIN_CSS: Asset = asset!("/assets/admin.css");

fn main() {
    #[cfg(feature = "server")]
    {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .init();
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_auth_provider();

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: ADMIN_CSS }

        Router::<Route> {}
    }
}

/// A web-specific Router around the shared `Navbar` component
/// which allows us to use the web-specific `Route` enum.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        Navbar {
            Link {
                to: Route::Search {},
                "Search"
            }
            Link {
                to: Route::Upload {},
                "Upload"
            }
            Link {
                to: Route::Admin {},
                "Admin"
            }
        }

        Outlet::<Route> {}
    }
}

/// Question paper search.
#[component]
fn Search() -> Element {
    rsx! {
        SearchPage {}
    }
}

/// Admin landing page.
#[component]
fn Admin() -> Element {
    rsx! {
        AdminPage {}
    }
}
