//! Timer abstraction for bounded waits.
//!
//! The guard's settle window and request timeouts race against futures from
//! this trait, so tests can drive them with a paused clock instead of real
//! browser timers.

use std::future::Future;
use std::time::Duration;

/// Produces futures that resolve after a delay.
pub trait Timer {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()>;
}

/// `setTimeout`-backed timer. Outside hydrate builds the returned future
/// never resolves, so nothing times out during SSR.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTimer;

impl Timer for BrowserTimer {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> {
        #[cfg(feature = "hydrate")]
        {
            gloo_timers::future::sleep(duration)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = duration;
            futures::future::pending::<()>()
        }
    }
}
