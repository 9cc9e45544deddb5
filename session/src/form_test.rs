use super::*;
use crate::state::SessionState;
use crate::storage::MemorySlot;
use crate::store::{DEFAULT_STORAGE_KEY, StoreOptions};
use crate::validate::{validate_login, validate_signup};
use crate::verifier::{DemoRegistrar, DemoVerifier, RegistrationError};

struct RejectingRegistrar;

impl AccountRegistrar for RejectingRegistrar {
    fn register(&self, _name: &str, _identifier: &str, _secret: &str) -> Result<(), RegistrationError> {
        Err(RegistrationError("backend down".to_owned()))
    }
}

fn store_with(slot: &MemorySlot) -> SessionStore {
    SessionStore::open(slot.clone(), StoreOptions::default())
}

fn login_form(email: &str, password: &str, remember: bool) -> LoginForm {
    LoginForm { email: email.to_owned(), password: password.to_owned(), remember }
}

fn signup_form(email: &str, password: &str) -> SignupForm {
    SignupForm {
        name: "Ada".to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
        confirm_password: password.to_owned(),
        terms_accepted: true,
    }
}

// =============================================================
// FormStatus
// =============================================================

#[test]
fn status_default_is_idle() {
    let status = FormStatus::default();
    assert!(!status.loading);
    assert_eq!(status.message(), None);
}

#[test]
fn begin_with_validation_error_sets_message_without_loading() {
    let mut status = FormStatus::default();
    assert!(!status.begin(Err(FormError::InvalidEmail)));
    assert!(!status.loading);
    assert_eq!(status.message().as_deref(), Some("Please enter a valid email address"));
}

#[test]
fn begin_replaces_previous_message() {
    let mut status = FormStatus::default();
    status.begin(Err(FormError::InvalidEmail));
    status.begin(Err(FormError::PasswordTooShort));
    assert_eq!(status.error, Some(FormError::PasswordTooShort));

    assert!(status.begin(Ok(())));
    assert_eq!(status.error, None);
    assert!(status.loading);
}

#[test]
fn begin_while_loading_is_ignored() {
    let mut status = FormStatus::default();
    assert!(status.begin(Ok(())));
    assert!(!status.begin(Ok(())));
    assert!(!status.begin(Err(FormError::MissingFields)));
    assert_eq!(status.error, None);
    assert!(status.loading);
}

#[test]
fn settle_clears_loading_on_success_and_failure() {
    let mut status = FormStatus::default();
    status.begin(Ok(()));
    assert_eq!(status.settle(Ok(Route::Dashboard)), Some(Route::Dashboard));
    assert!(!status.loading);

    status.begin(Ok(()));
    assert_eq!(status.settle::<Route>(Err(FormError::InvalidCredentials)), None);
    assert!(!status.loading);
    assert_eq!(status.message().as_deref(), Some("Invalid email address or password"));
}

// =============================================================
// Login completion
// =============================================================

#[test]
fn demo_login_authenticates_and_targets_dashboard() {
    let slot = MemorySlot::new();
    let mut store = store_with(&slot);
    let form = login_form("test@visionexdigital.com.au", "password123", false);

    assert_eq!(validate_login(&form), Ok(()));
    assert_eq!(complete_login(&form, &DemoVerifier, &mut store), Ok(Route::Dashboard));
    assert_eq!(store.state(), &SessionState::authenticated("test@visionexdigital.com.au"));
    assert_eq!(slot.get(DEFAULT_STORAGE_KEY), None);
}

#[test]
fn demo_login_with_remember_persists() {
    let slot = MemorySlot::new();
    let mut store = store_with(&slot);
    let form = login_form("test@visionexdigital.com.au", "password123", true);

    complete_login(&form, &DemoVerifier, &mut store).unwrap();
    assert!(slot.get(DEFAULT_STORAGE_KEY).is_some());
}

#[test]
fn wrong_password_leaves_store_unchanged() {
    let slot = MemorySlot::new();
    let mut store = store_with(&slot);
    let form = login_form("x@y.com", "wrongpass", true);

    let err = complete_login(&form, &DemoVerifier, &mut store).unwrap_err();
    assert_eq!(err.to_string(), "Invalid email address or password");
    assert_eq!(store.state(), &SessionState::logged_out());
    assert_eq!(slot.get(DEFAULT_STORAGE_KEY), None);
}

// =============================================================
// Signup completion
// =============================================================

#[test]
fn short_signup_password_never_reaches_store() {
    let mut status = FormStatus::default();
    let form = signup_form("a@b.com", "short");

    assert!(!status.begin(validate_signup(&form)));
    assert_eq!(status.message().as_deref(), Some("Password must be at least 6 characters long"));
}

#[test]
fn signup_always_remembers_session() {
    let slot = MemorySlot::new();
    let mut store = store_with(&slot);

    let target = complete_signup(&signup_form("new@b.com", "secret1"), &DemoRegistrar, &mut store);
    assert_eq!(target, Ok(Route::Dashboard));
    assert_eq!(store.state().user(), Some("new@b.com"));
    assert_eq!(store_with(&slot).state().user(), Some("new@b.com"));
}

#[test]
fn failing_registrar_maps_to_generic_message() {
    let mut store = store_with(&MemorySlot::new());
    let err = complete_signup(&signup_form("new@b.com", "secret1"), &RejectingRegistrar, &mut store).unwrap_err();
    assert_eq!(err.to_string(), "An error occurred during signup. Please try again.");
    assert!(!store.state().is_authenticated());
}

#[test]
fn auth_modes_link_to_each_other() {
    assert_eq!(AuthMode::Login.alternate(), Route::Signup);
    assert_eq!(AuthMode::Signup.alternate(), Route::Login);
}
