use super::*;

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_no_user() {
    let state = AuthState::default();
    assert!(!state.is_authenticated());
    assert_eq!(state.user(), None);
}

#[test]
fn auth_state_default_is_loading() {
    let state = AuthState::default();
    assert!(state.loading);
}

#[test]
fn auth_state_exposes_session_user() {
    let state = AuthState { session: SessionState::authenticated("a@b.com"), loading: false };
    assert!(state.is_authenticated());
    assert_eq!(state.user(), Some("a@b.com"));
}
