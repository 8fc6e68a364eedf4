//! Delay source for the poll loop.

use std::time::Duration;

/// One-shot async delay.
///
/// `?Send` because browser timers are tied to the main thread.
#[async_trait::async_trait(?Send)]
pub trait Timer {
    /// Resolve after `duration` has elapsed.
    async fn sleep(&self, duration: Duration);
}

/// `setTimeout`-backed timer for the browser build.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooTimer;

#[cfg(feature = "hydrate")]
#[async_trait::async_trait(?Send)]
impl Timer for GlooTimer {
    async fn sleep(&self, duration: Duration) {
        gloo_timers::future::sleep(duration).await;
    }
}
