//! Authentication state shared through context.

use dioxus::prelude::*;

/// Who is signed in, if anyone.
///
/// Provided once at the app root with [`use_auth_provider`] and read with
/// [`use_auth`].
#[derive(Clone, Copy, PartialEq)]
pub struct AuthState {
    user: Signal<Option<String>>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.user.read().is_some()
    }

    pub fn user(&self) -> Option<String> {
        self.user.read().clone()
    }

    pub fn sign_in(&mut self, user: impl Into<String>) {
        let user = user.into();
        tracing::info!("Signed in as {}", user);
        self.user.set(Some(user));
    }

    pub fn sign_out(&mut self) {
        self.user.set(None);
    }
}

/// Install an empty [`AuthState`] for this component and its children.
pub fn use_auth_provider() -> AuthState {
    use_context_provider(|| AuthState {
        user: Signal::new(None),
    })
}

/// The nearest [`AuthState`].
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}
