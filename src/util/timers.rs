//! Browser timers for the contact form's auto-reset.
//!
//! Client-side (csr): `gloo-timers` timeouts; dropping the handle clears the
//! timeout. Native builds have no event loop, so scheduled tasks are dropped
//! unrun.

#[cfg(test)]
#[path = "timers_test.rs"]
mod timers_test;

use std::time::Duration;

use behavior::Scheduler;

/// Timer length in whole milliseconds, saturating at the `u32` maximum that
/// `setTimeout` accepts.
pub fn timer_millis(after: Duration) -> u32 {
    u32::try_from(after.as_millis()).unwrap_or(u32::MAX)
}

/// [`Scheduler`] backed by `window.setTimeout`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

#[cfg(feature = "csr")]
impl Scheduler for BrowserScheduler {
    type Handle = gloo_timers::callback::Timeout;

    fn schedule(&self, after: Duration, task: Box<dyn FnOnce()>) -> Self::Handle {
        gloo_timers::callback::Timeout::new(timer_millis(after), task)
    }

    fn cancel(&self, handle: Self::Handle) {
        drop(handle);
    }
}

#[cfg(not(feature = "csr"))]
impl Scheduler for BrowserScheduler {
    type Handle = ();

    fn schedule(&self, after: Duration, task: Box<dyn FnOnce()>) {
        log::debug!("timers: no event loop, dropping task due in {}ms", timer_millis(after));
        drop(task);
    }

    fn cancel(&self, (): ()) {}
}
