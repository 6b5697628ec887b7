//! Cancellable delayed tasks.
//!
//! The submission auto-reset is scheduled through a [`Scheduler`] owned by the
//! form instance, so two forms never share a timer. The browser build backs
//! this with `gloo-timers`; tests use [`ManualScheduler`] and advance a
//! virtual clock.

#[cfg(test)]
#[path = "schedule_test.rs"]
mod schedule_test;

use std::time::Duration;

/// Delay/timer primitive: schedule a task after a delay, or cancel it.
pub trait Scheduler {
    /// Pending task; passing it to [`Scheduler::cancel`] guarantees it never runs.
    type Handle;

    fn schedule(&self, after: Duration, task: Box<dyn FnOnce()>) -> Self::Handle;

    fn cancel(&self, handle: Self::Handle);
}

#[cfg(any(test, feature = "test-utils"))]
pub use manual::ManualScheduler;

#[cfg(any(test, feature = "test-utils"))]
mod manual {
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    use super::Scheduler;

    struct Pending {
        id: u64,
        due: Duration,
        task: Box<dyn FnOnce()>,
    }

    #[derive(Default)]
    struct Clock {
        now: Duration,
        next_id: u64,
        pending: Vec<Pending>,
    }

    /// Virtual clock that runs due tasks only when advanced.
    #[derive(Clone, Default)]
    pub struct ManualScheduler {
        clock: Rc<RefCell<Clock>>,
    }

    impl ManualScheduler {
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        #[must_use]
        pub fn now(&self) -> Duration {
            self.clock.borrow().now
        }

        #[must_use]
        pub fn pending(&self) -> usize {
            self.clock.borrow().pending.len()
        }

        /// Move the clock forward, running every task that falls due in
        /// deadline order (ties in scheduling order).
        pub fn advance(&self, by: Duration) {
            let target = self.now() + by;
            loop {
                let next = {
                    let mut clock = self.clock.borrow_mut();
                    let due = clock
                        .pending
                        .iter()
                        .enumerate()
                        .filter(|(_, p)| p.due <= target)
                        .min_by_key(|(_, p)| (p.due, p.id))
                        .map(|(idx, _)| idx);
                    match due {
                        Some(idx) => {
                            let pending = clock.pending.remove(idx);
                            clock.now = pending.due;
                            Some(pending.task)
                        }
                        None => {
                            clock.now = target;
                            None
                        }
                    }
                };
                match next {
                    Some(task) => task(),
                    None => break,
                }
            }
        }
    }

    impl Scheduler for ManualScheduler {
        type Handle = u64;

        fn schedule(&self, after: Duration, task: Box<dyn FnOnce()>) -> u64 {
            let mut clock = self.clock.borrow_mut();
            clock.next_id += 1;
            let id = clock.next_id;
            let due = clock.now + after;
            clock.pending.push(Pending { id, due, task });
            id
        }

        fn cancel(&self, handle: u64) {
            self.clock.borrow_mut().pending.retain(|p| p.id != handle);
        }
    }
}
