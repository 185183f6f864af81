//! This crate contains all shared UI for the workspace.

// Dioxus `rsx!` macro expands to unwraps internally; allow to avoid false positives.
#![allow(clippy::disallowed_methods)]

mod navbar;
pub use navbar::Navbar;

mod spinner;
pub use spinner::Spinner;

mod clipboard;
pub use clipboard::copy_link;

pub mod admin;
pub mod auth;
pub mod search;
