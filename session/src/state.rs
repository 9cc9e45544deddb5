//! Session state and its persisted record layout.
//!
//! DESIGN
//! ======
//! `SessionState` keeps its fields private so `user` can only be present
//! when the session is authenticated. The persisted record is a separate
//! serde type because the logged-out record omits both fields entirely
//! (`{"state":{},"version":0}`) rather than writing falsy values.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use serde::{Deserialize, Serialize};

/// In-memory authentication state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    is_authenticated: bool,
    user: Option<String>,
}

impl SessionState {
    /// The default, logged-out state.
    #[must_use]
    pub fn logged_out() -> Self {
        Self::default()
    }

    /// An authenticated state for `user`.
    #[must_use]
    pub fn authenticated(user: impl Into<String>) -> Self {
        Self { is_authenticated: true, user: Some(user.into()) }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.is_authenticated
    }

    /// The signed-in identifier. `None` whenever the session is logged out.
    #[must_use]
    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    /// Project this state into the record written to the durable slot.
    #[must_use]
    pub fn to_persisted(&self, version: u32) -> PersistedRecord {
        let state = if self.is_authenticated {
            PersistedState { is_authenticated: Some(true), user: self.user.clone() }
        } else {
            PersistedState::default()
        };
        PersistedRecord { state, version }
    }
}

/// Partial session fields as stored on disk. Absent fields mean "default".
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedState {
    #[serde(rename = "isAuthenticated", default, skip_serializing_if = "Option::is_none")]
    pub is_authenticated: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
}

/// Envelope written under the store key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedRecord {
    #[serde(default)]
    pub state: PersistedState,
    #[serde(default)]
    pub version: u32,
}

impl PersistedRecord {
    /// Resolve the stored fields into a state that honors the invariant.
    ///
    /// An authenticated flag without a user (or a user without the flag)
    /// cannot come from this crate's writer, so it is treated as logged out.
    #[must_use]
    pub fn into_state(self) -> SessionState {
        match (self.state.is_authenticated, self.state.user) {
            (Some(true), Some(user)) => SessionState::authenticated(user),
            _ => SessionState::logged_out(),
        }
    }
}
