//! Credential verification and account registration seams.
//!
//! TRADE-OFFS
//! ==========
//! There is no backend. [`DemoVerifier`] accepts a single hardcoded pair and
//! [`DemoRegistrar`] accepts everything. Both are placeholders for a real
//! identity service and must not be read as security logic; swapping them
//! out requires no change to the forms or the store.

#[cfg(test)]
#[path = "verifier_test.rs"]
mod verifier_test;

/// Checks an identifier/secret pair.
pub trait CredentialVerifier: Send + Sync {
    fn verify(&self, identifier: &str, secret: &str) -> bool;
}

/// Error returned by an [`AccountRegistrar`].
#[derive(Debug, thiserror::Error)]
#[error("registration failed: {0}")]
pub struct RegistrationError(pub String);

/// Creates a new account.
pub trait AccountRegistrar: Send + Sync {
    /// # Errors
    ///
    /// Returns [`RegistrationError`] when the account cannot be created.
    fn register(&self, name: &str, identifier: &str, secret: &str) -> Result<(), RegistrationError>;
}

/// Demo account accepted by [`DemoVerifier`].
pub const DEMO_IDENTIFIER: &str = "test@visionexdigital.com.au";
pub const DEMO_SECRET: &str = "password123";

/// Placeholder verifier: accepts only the demo account.
#[derive(Clone, Copy, Debug, Default)]
pub struct DemoVerifier;

impl CredentialVerifier for DemoVerifier {
    fn verify(&self, identifier: &str, secret: &str) -> bool {
        identifier == DEMO_IDENTIFIER && secret == DEMO_SECRET
    }
}

/// Placeholder registrar: every signup succeeds and nothing is stored.
#[derive(Clone, Copy, Debug, Default)]
pub struct DemoRegistrar;

impl AccountRegistrar for DemoRegistrar {
    fn register(&self, _name: &str, _identifier: &str, _secret: &str) -> Result<(), RegistrationError> {
        Ok(())
    }
}
