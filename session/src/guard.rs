//! Route guard: turns authentication transitions into redirects.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every page owns one guard and feeds it the session's `is_authenticated`
//! value each time it changes. The guard remembers the last value it saw,
//! so repeated notifications of the same value never produce a second
//! redirect.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::route::Route;

/// Which side of the login wall a page lives on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardPolicy {
    /// Requires a session; logged-out visitors go to the landing page.
    Protected,
    /// Login/signup; authenticated visitors go to the dashboard.
    PublicOnly,
}

impl GuardPolicy {
    #[must_use]
    pub fn for_route(route: Route) -> Self {
        if route.is_protected() { Self::Protected } else { Self::PublicOnly }
    }

    /// Navigation target for a page under this policy given the session value.
    #[must_use]
    pub fn redirect_for(self, is_authenticated: bool) -> Option<Route> {
        match (self, is_authenticated) {
            (Self::Protected, false) => Some(Route::Landing),
            (Self::PublicOnly, true) => Some(Route::Dashboard),
            _ => None,
        }
    }
}

/// Per-page transition tracker.
#[derive(Clone, Debug)]
pub struct RouteGuard {
    policy: GuardPolicy,
    last_seen: Option<bool>,
}

impl RouteGuard {
    #[must_use]
    pub fn new(policy: GuardPolicy) -> Self {
        Self { policy, last_seen: None }
    }

    #[must_use]
    pub fn policy(&self) -> GuardPolicy {
        self.policy
    }

    /// Record the current session value and return a redirect if this is a
    /// transition the policy reacts to. The first observation counts as a
    /// transition.
    pub fn observe(&mut self, is_authenticated: bool) -> Option<Route> {
        if self.last_seen == Some(is_authenticated) {
            return None;
        }
        self.last_seen = Some(is_authenticated);
        let target = self.policy.redirect_for(is_authenticated);
        if let Some(route) = target {
            tracing::debug!(policy = ?self.policy, to = route.path(), "route guard redirect");
        }
        target
    }

    /// Whether page content may render. Protected pages render nothing
    /// until the session is authenticated.
    #[must_use]
    pub fn allows_render(&self, is_authenticated: bool) -> bool {
        match self.policy {
            GuardPolicy::Protected => is_authenticated,
            GuardPolicy::PublicOnly => true,
        }
    }
}
