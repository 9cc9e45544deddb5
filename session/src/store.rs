//! Session store: owns [`SessionState`], persists it, notifies subscribers.
//!
//! DESIGN
//! ======
//! The store is an ordinary value constructed by the host and injected
//! where it is needed; there is no global instance. `login` and `logout`
//! are the only mutators and both are total: durable slot failures are
//! logged and the in-memory transition still happens.
//!
//! Persistence is opt-in per login. `login(_, true)` writes the record,
//! `login(_, false)` leaves the slot untouched, and `logout` overwrites an
//! existing record with the empty one so no stale user can rehydrate.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::fmt;

use crate::state::{PersistedRecord, SessionState};
use crate::storage::{DurableSlot, StorageError};

/// Durable slot key the session is stored under.
pub const DEFAULT_STORAGE_KEY: &str = "auth-storage";

/// Version stamped on written records. Records with another version are discarded.
pub const PERSIST_VERSION: u32 = 0;

/// Where and how the store persists.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreOptions {
    pub key: String,
    pub version: u32,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self { key: DEFAULT_STORAGE_KEY.to_owned(), version: PERSIST_VERSION }
    }
}

/// Handle returned by [`SessionStore::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&SessionState) + Send + Sync>;

pub struct SessionStore {
    state: SessionState,
    slot: Box<dyn DurableSlot>,
    options: StoreOptions,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore")
            .field("state", &self.state)
            .field("options", &self.options)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

impl SessionStore {
    /// Create a logged-out store without reading the slot.
    ///
    /// Call [`SessionStore::rehydrate`] before the first read, or use
    /// [`SessionStore::open`].
    pub fn new(slot: impl DurableSlot + 'static, options: StoreOptions) -> Self {
        Self {
            state: SessionState::logged_out(),
            slot: Box::new(slot),
            options,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Create a store and immediately rehydrate it from the slot.
    pub fn open(slot: impl DurableSlot + 'static, options: StoreOptions) -> Self {
        let mut store = Self::new(slot, options);
        store.rehydrate();
        store
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub fn options(&self) -> &StoreOptions {
        &self.options
    }

    /// Overwrite the in-memory state with the durable record, if one exists.
    ///
    /// Missing, unreadable, malformed and version-mismatched records all
    /// leave the current state in place.
    pub fn rehydrate(&mut self) {
        let record = match self.read_record() {
            Ok(Some(record)) => record,
            Ok(None) => return,
            Err(e) => {
                tracing::warn!(key = %self.options.key, error = %e, "session rehydrate failed");
                return;
            }
        };
        if record.version != self.options.version {
            tracing::warn!(
                key = %self.options.key,
                stored = record.version,
                expected = self.options.version,
                "session record version mismatch; discarding"
            );
            return;
        }
        let next = record.into_state();
        tracing::debug!(authenticated = next.is_authenticated(), "session rehydrated");
        self.replace(next);
    }

    /// Mark the session authenticated as `identifier`.
    ///
    /// The identifier is not validated here; callers own validation.
    pub fn login(&mut self, identifier: impl Into<String>, remember: bool) {
        let next = SessionState::authenticated(identifier);
        tracing::debug!(remember, "session login");
        if remember {
            self.persist(&next);
        }
        self.replace(next);
    }

    /// Return to the logged-out state.
    pub fn logout(&mut self) {
        let next = SessionState::logged_out();
        tracing::debug!("session logout");
        match self.slot.load(&self.options.key) {
            Ok(Some(_)) => self.persist(&next),
            Ok(None) => {}
            Err(e) => tracing::warn!(key = %self.options.key, error = %e, "session slot unreadable on logout"),
        }
        self.replace(next);
    }

    /// Register `listener`, called synchronously after every mutation.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&SessionState) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns `false` if `id` was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    fn read_record(&self) -> Result<Option<PersistedRecord>, StorageError> {
        let Some(raw) = self.slot.load(&self.options.key)? else {
            return Ok(None);
        };
        Ok(Some(serde_json::from_str(&raw)?))
    }

    fn persist(&self, state: &SessionState) {
        let record = state.to_persisted(self.options.version);
        let result = serde_json::to_string(&record)
            .map_err(StorageError::from)
            .and_then(|raw| self.slot.store(&self.options.key, &raw));
        if let Err(e) = result {
            tracing::warn!(key = %self.options.key, error = %e, "session persist failed");
        }
    }

    fn replace(&mut self, next: SessionState) {
        self.state = next;
        for (_, listener) in &mut self.listeners {
            listener(&self.state);
        }
    }
}
