use super::*;

// =============================================================
// Policy table
// =============================================================

#[test]
fn policy_for_route() {
    assert_eq!(GuardPolicy::for_route(Route::Dashboard), GuardPolicy::Protected);
    assert_eq!(GuardPolicy::for_route(Route::Landing), GuardPolicy::PublicOnly);
    assert_eq!(GuardPolicy::for_route(Route::Login), GuardPolicy::PublicOnly);
    assert_eq!(GuardPolicy::for_route(Route::Signup), GuardPolicy::PublicOnly);
}

#[test]
fn redirect_table() {
    assert_eq!(GuardPolicy::Protected.redirect_for(false), Some(Route::Landing));
    assert_eq!(GuardPolicy::Protected.redirect_for(true), None);
    assert_eq!(GuardPolicy::PublicOnly.redirect_for(true), Some(Route::Dashboard));
    assert_eq!(GuardPolicy::PublicOnly.redirect_for(false), None);
}

// =============================================================
// Protected pages
// =============================================================

#[test]
fn protected_redirects_on_initial_logged_out_read() {
    let mut guard = RouteGuard::new(GuardPolicy::Protected);
    assert_eq!(guard.observe(false), Some(Route::Landing));
}

#[test]
fn protected_repeated_logged_out_redirects_once() {
    let mut guard = RouteGuard::new(GuardPolicy::Protected);
    let redirects = (0..5).filter_map(|_| guard.observe(false)).count();
    assert_eq!(redirects, 1);
}

#[test]
fn protected_redirects_again_after_real_transition() {
    let mut guard = RouteGuard::new(GuardPolicy::Protected);
    assert_eq!(guard.observe(true), None);
    assert_eq!(guard.observe(false), Some(Route::Landing));
    assert_eq!(guard.observe(false), None);
    assert_eq!(guard.observe(true), None);
    assert_eq!(guard.observe(false), Some(Route::Landing));
}

#[test]
fn protected_renders_only_when_authenticated() {
    let guard = RouteGuard::new(GuardPolicy::Protected);
    assert!(!guard.allows_render(false));
    assert!(guard.allows_render(true));
}

// =============================================================
// Public-only pages
// =============================================================

#[test]
fn public_only_redirects_once_when_authenticated() {
    let mut guard = RouteGuard::new(GuardPolicy::PublicOnly);
    assert_eq!(guard.observe(false), None);
    assert_eq!(guard.observe(true), Some(Route::Dashboard));
    assert_eq!(guard.observe(true), None);
}

#[test]
fn public_only_always_renders() {
    let guard = RouteGuard::new(GuardPolicy::PublicOnly);
    assert!(guard.allows_render(false));
    assert!(guard.allows_render(true));
}
