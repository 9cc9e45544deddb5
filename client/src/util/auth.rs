//! Shared route-guard helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical redirect behavior: protected
//! pages bounce logged-out visitors to `/`, login and signup bounce
//! authenticated visitors to `/dashboard`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use session::{GuardPolicy, Route, RouteGuard};

use crate::state::auth::AuthState;
use crate::state::session::SessionContext;

/// Feed `state` to `guard` unless the session is still loading.
pub fn guard_redirect(guard: &mut RouteGuard, state: &AuthState) -> Option<Route> {
    if state.loading {
        return None;
    }
    guard.observe(state.is_authenticated())
}

/// Redirect per `policy` on each authentication transition.
///
/// Guard redirects replace the current history entry so the back button
/// does not return to a page that would redirect again.
pub fn install_route_guard<F>(session: SessionContext, policy: GuardPolicy, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let auth = session.auth();
    let mut guard = RouteGuard::new(policy);
    Effect::new(move || {
        let state = auth.get();
        if let Some(route) = guard_redirect(&mut guard, &state) {
            navigate(route.path(), NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}

/// Whether a page under `policy` may render its content for `state`.
pub fn may_render(policy: GuardPolicy, state: &AuthState) -> bool {
    !state.loading && RouteGuard::new(policy).allows_render(state.is_authenticated())
}
