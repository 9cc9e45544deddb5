//! Lifetime-checked deferred work on the browser event loop.

use std::time::Duration;

use session::ViewLifetime;

/// Run `continuation` after `delay` unless `lifetime` has ended by then.
///
/// Browser-only. Server rendering never submits forms, so outside the
/// hydrate build this drops the continuation.
pub fn spawn_after_delay<F>(lifetime: ViewLifetime, delay: Duration, continuation: F)
where
    F: FnOnce() + 'static,
{
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        lifetime.run_after(gloo_timers::future::sleep(delay), continuation).await;
    });

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (lifetime, delay, continuation);
    }
}
