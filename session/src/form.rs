//! Auth form inputs, errors and submission lifecycle.
//!
//! DESIGN
//! ======
//! Login and signup share one lifecycle: validate locally, enter loading,
//! wait out the simulated call, then settle with either a navigation target
//! or a single error message. [`FormStatus`] tracks the visible part of
//! that lifecycle; `complete_login` / `complete_signup` are the deferred
//! step that actually touches the store.
//!
//! Signup always persists the new session while login persists only when
//! remember-me is checked. The asymmetry is kept as observed.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use std::time::Duration;

use crate::route::Route;
use crate::store::SessionStore;
use crate::verifier::{AccountRegistrar, CredentialVerifier};

/// Length of the simulated network round trip.
pub const SIMULATED_CALL_DELAY: Duration = Duration::from_millis(1000);

/// User-facing form error. `Display` is the message shown above the form.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Please enter a valid email and password")]
    MissingCredentials,
    #[error("Please fill in all fields")]
    MissingFields,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Password must be at least 6 characters long")]
    PasswordTooShort,
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("You must accept the terms and conditions")]
    TermsNotAccepted,
    #[error("Invalid email address or password")]
    InvalidCredentials,
    #[error("An error occurred during signup. Please try again.")]
    SignupFailed,
}

/// Which form is being shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Signup,
}

impl AuthMode {
    /// The page the other mode lives on, for the "switch form" link.
    #[must_use]
    pub fn alternate(self) -> Route {
        match self {
            Self::Login => Route::Signup,
            Self::Signup => Route::Login,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub remember: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub terms_accepted: bool,
}

/// Visible submission state: one error message and a loading flag.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormStatus {
    pub error: Option<FormError>,
    pub loading: bool,
}

impl FormStatus {
    /// Start a submission with the result of local validation.
    ///
    /// Returns `true` when the simulated call should be started. A submit
    /// while already loading is ignored and returns `false`.
    pub fn begin(&mut self, validation: Result<(), FormError>) -> bool {
        if self.loading {
            return false;
        }
        match validation {
            Ok(()) => {
                self.error = None;
                self.loading = true;
                true
            }
            Err(e) => {
                self.error = Some(e);
                false
            }
        }
    }

    /// Finish a submission. Loading is cleared whatever the outcome.
    pub fn settle<T>(&mut self, outcome: Result<T, FormError>) -> Option<T> {
        self.loading = false;
        match outcome {
            Ok(value) => {
                self.error = None;
                Some(value)
            }
            Err(e) => {
                self.error = Some(e);
                None
            }
        }
    }

    #[must_use]
    pub fn message(&self) -> Option<String> {
        self.error.as_ref().map(ToString::to_string)
    }
}

/// Deferred step of a login submission.
///
/// # Errors
///
/// Returns [`FormError::InvalidCredentials`] when the verifier rejects the
/// pair; the store is left untouched.
pub fn complete_login(
    form: &LoginForm,
    verifier: &dyn CredentialVerifier,
    store: &mut SessionStore,
) -> Result<Route, FormError> {
    if !verifier.verify(&form.email, &form.password) {
        return Err(FormError::InvalidCredentials);
    }
    store.login(form.email.clone(), form.remember);
    Ok(Route::Dashboard)
}

/// Deferred step of a signup submission. The new session is always remembered.
///
/// # Errors
///
/// Returns [`FormError::SignupFailed`] when the registrar fails; the store
/// is left untouched.
pub fn complete_signup(
    form: &SignupForm,
    registrar: &dyn AccountRegistrar,
    store: &mut SessionStore,
) -> Result<Route, FormError> {
    if let Err(e) = registrar.register(&form.name, &form.email, &form.password) {
        tracing::warn!(error = %e, "signup failed");
        return Err(FormError::SignupFailed);
    }
    store.login(form.email.clone(), true);
    Ok(Route::Dashboard)
}
