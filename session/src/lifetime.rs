//! View lifetimes for deferred work.
//!
//! SYSTEM CONTEXT
//! ==============
//! The auth forms wait out a simulated network delay before touching the
//! session. If the user navigates away first, the continuation must not
//! run. A view creates one [`ViewLifetime`], ends it on teardown, and hands
//! clones to every task it spawns.

#[cfg(test)]
#[path = "lifetime_test.rs"]
mod lifetime_test;

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Shared "view is still mounted" flag. Clones observe the same flag.
#[derive(Clone, Debug)]
pub struct ViewLifetime {
    alive: Arc<AtomicBool>,
}

impl Default for ViewLifetime {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewLifetime {
    #[must_use]
    pub fn new() -> Self {
        Self { alive: Arc::new(AtomicBool::new(true)) }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.alive.load(Ordering::Relaxed)
    }

    /// Mark the owning view as torn down. Idempotent.
    pub fn end(&self) {
        self.alive.store(false, Ordering::Relaxed);
    }

    /// Await `delay`, then run `continuation` only if the view is still active.
    pub async fn run_after<D, F, T>(&self, delay: D, continuation: F) -> Option<T>
    where
        D: Future<Output = ()>,
        F: FnOnce() -> T,
    {
        delay.await;
        if !self.is_active() {
            tracing::debug!("view ended before deferred call settled; dropping result");
            return None;
        }
        Some(continuation())
    }
}
