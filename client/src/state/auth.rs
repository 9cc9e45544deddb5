//! Auth-session snapshot for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate login redirects
//! and identity-dependent rendering.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use session::SessionState;

/// Session state mirrored into a signal, plus whether it has been rehydrated yet.
///
/// `loading` starts `true` and clears once the browser has read the durable
/// slot. Guards do nothing while it is set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub session: SessionState,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { session: SessionState::logged_out(), loading: true }
    }
}

impl AuthState {
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    #[must_use]
    pub fn user(&self) -> Option<&str> {
        self.session.user()
    }
}
