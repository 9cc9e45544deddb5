//! Session context injected through Leptos context.
//!
//! DESIGN
//! ======
//! `SessionContext` pairs the `session::SessionStore` (kept in a
//! `StoredValue`) with an `AuthState` signal that a store subscription keeps
//! in sync. Components read the signal and mutate only through `logout`
//! or `with_store`, so every write goes through the store and its
//! persistence rules.

use std::sync::Arc;

use leptos::prelude::*;
use session::{
    AccountRegistrar, CredentialVerifier, DemoRegistrar, DemoVerifier, DurableSlot, SessionStore, StoreOptions,
};

use crate::state::auth::AuthState;

#[derive(Clone, Copy)]
pub struct SessionContext {
    store: StoredValue<SessionStore>,
    auth: RwSignal<AuthState>,
}

impl SessionContext {
    /// Build a logged-out, still-loading session backed by `slot`.
    ///
    /// The slot is not read until [`SessionContext::rehydrate`].
    pub fn new(slot: impl DurableSlot + 'static) -> Self {
        let auth = RwSignal::new(AuthState::default());
        let mut store = SessionStore::new(slot, StoreOptions::default());
        store.subscribe(move |state| auth.update(|a| a.session = state.clone()));
        Self { store: StoredValue::new(store), auth }
    }

    /// Reactive, read-only view of the session.
    pub fn auth(&self) -> ReadSignal<AuthState> {
        self.auth.read_only()
    }

    /// Read the durable slot, then clear `loading`.
    pub fn rehydrate(&self) {
        self.store.update_value(SessionStore::rehydrate);
        self.auth.update(|a| a.loading = false);
    }

    pub fn logout(&self) {
        self.store.update_value(SessionStore::logout);
    }

    /// Run `f` against the store. `None` once the owning reactive scope is gone.
    pub fn with_store<T>(&self, f: impl FnOnce(&mut SessionStore) -> T) -> Option<T> {
        self.store.try_update_value(f)
    }
}

/// Verification seams used by the auth forms.
#[derive(Clone)]
pub struct AuthServices {
    pub verifier: Arc<dyn CredentialVerifier>,
    pub registrar: Arc<dyn AccountRegistrar>,
}

impl AuthServices {
    /// The hardcoded demo account and an always-succeeding signup.
    pub fn demo() -> Self {
        Self { verifier: Arc::new(DemoVerifier), registrar: Arc::new(DemoRegistrar) }
    }
}
