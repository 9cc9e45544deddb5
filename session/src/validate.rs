//! Local validation rules for the auth forms.
//!
//! Checks run in a fixed order and stop at the first failure, so the form
//! only ever shows one message.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use std::sync::LazyLock;

use regex::Regex;

use crate::form::{FormError, LoginForm, SignupForm};

pub const MIN_PASSWORD_LEN: usize = 6;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// `local@domain.tld` with no whitespace and exactly one `@`.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Password length counted in characters, not bytes.
#[must_use]
pub fn is_long_enough(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LEN
}

/// # Errors
///
/// Returns the first [`FormError`] the login input violates.
pub fn validate_login(form: &LoginForm) -> Result<(), FormError> {
    if form.email.is_empty() || form.password.is_empty() {
        return Err(FormError::MissingCredentials);
    }
    if !is_valid_email(&form.email) {
        return Err(FormError::InvalidEmail);
    }
    if !is_long_enough(&form.password) {
        return Err(FormError::PasswordTooShort);
    }
    Ok(())
}

/// # Errors
///
/// Returns the first [`FormError`] the signup input violates.
pub fn validate_signup(form: &SignupForm) -> Result<(), FormError> {
    let required = [&form.name, &form.email, &form.password, &form.confirm_password];
    if required.iter().any(|field| field.is_empty()) {
        return Err(FormError::MissingFields);
    }
    if !is_valid_email(&form.email) {
        return Err(FormError::InvalidEmail);
    }
    if !is_long_enough(&form.password) {
        return Err(FormError::PasswordTooShort);
    }
    if form.password != form.confirm_password {
        return Err(FormError::PasswordMismatch);
    }
    if !form.terms_accepted {
        return Err(FormError::TermsNotAccepted);
    }
    Ok(())
}
