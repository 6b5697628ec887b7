//! Contact form driver.
//!
//! ARCHITECTURE
//! ============
//! [`ContactForm`] wires a [`SubmissionController`] to its two platform
//! collaborators: a [`Delivery`] that ships the payload and a [`Scheduler`]
//! that arms the auto-reset. Views subscribe to [`FormSnapshot`] changes and
//! never touch the controller directly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything runs on the single UI event loop. The future returned by
//! [`ContactForm::submit`] is spawned by the caller and holds only a weak
//! reference, so a form that goes away before delivery completes simply
//! drops the late result.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use futures::FutureExt;
use futures::future::LocalBoxFuture;

use crate::contact::{ContactFields, ContactPayload, Field};
use crate::schedule::Scheduler;
use crate::submission::{
    AttemptId, ResetTicket, ScheduledReset, SubmissionController, SubmitFailure, SubmitRejected, SubmitStatus,
};

/// External collaborator that delivers a submission and reports the outcome.
pub trait Delivery {
    fn deliver(&self, payload: ContactPayload) -> LocalBoxFuture<'static, Result<(), SubmitFailure>>;
}

/// What a view needs to render the form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormSnapshot {
    pub status: SubmitStatus,
    pub fields: ContactFields,
    pub failure: Option<SubmitFailure>,
}

impl FormSnapshot {
    /// The submit control is disabled while an attempt is in flight.
    #[must_use]
    pub fn submit_disabled(&self) -> bool {
        !self.status.accepts_submit()
    }
}

type Listener = Rc<dyn Fn(&FormSnapshot)>;

struct FormInner<S: Scheduler, D> {
    controller: RefCell<SubmissionController>,
    scheduler: S,
    delivery: D,
    pending_reset: RefCell<Option<S::Handle>>,
    listeners: RefCell<Vec<Listener>>,
}

/// Shared handle to one contact form. Clones refer to the same form.
pub struct ContactForm<S: Scheduler, D> {
    inner: Rc<FormInner<S, D>>,
}

impl<S: Scheduler, D> Clone for ContactForm<S, D> {
    fn clone(&self) -> Self {
        Self { inner: Rc::clone(&self.inner) }
    }
}

impl<S, D> ContactForm<S, D>
where
    S: Scheduler + 'static,
    D: Delivery + 'static,
{
    #[must_use]
    pub fn new(scheduler: S, delivery: D, reset_after: Duration) -> Self {
        Self {
            inner: Rc::new(FormInner {
                controller: RefCell::new(SubmissionController::new(reset_after)),
                scheduler,
                delivery,
                pending_reset: RefCell::new(None),
                listeners: RefCell::new(Vec::new()),
            }),
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> FormSnapshot {
        let controller = self.inner.controller.borrow();
        FormSnapshot {
            status: controller.status(),
            fields: controller.fields().clone(),
            failure: controller.failure().cloned(),
        }
    }

    #[must_use]
    pub fn status(&self) -> SubmitStatus {
        self.inner.controller.borrow().status()
    }

    /// Call `listener` with a fresh snapshot after every change.
    pub fn subscribe(&self, listener: impl Fn(&FormSnapshot) + 'static) {
        self.inner.listeners.borrow_mut().push(Rc::new(listener));
    }

    pub fn set_field(&self, field: Field, value: String) {
        self.inner.controller.borrow_mut().set_field(field, value);
        self.notify();
    }

    /// Start a submission and return the delivery task to spawn.
    ///
    /// # Errors
    ///
    /// Propagates [`SubmitRejected`] from the controller; nothing is spawned.
    pub fn submit(&self) -> Result<LocalBoxFuture<'static, ()>, SubmitRejected> {
        let pending = self.inner.controller.borrow_mut().begin_submit()?;
        self.cancel_pending_reset();
        self.notify();

        let delivery = self.inner.delivery.deliver(pending.payload);
        let form = Rc::downgrade(&self.inner);
        let attempt = pending.attempt;
        Ok(async move {
            let outcome = delivery.await;
            if let Some(inner) = form.upgrade() {
                Self { inner }.finish(attempt, outcome);
            }
        }
        .boxed_local())
    }

    /// User dismissal of the success/error message.
    pub fn dismiss(&self) -> bool {
        let dismissed = self.inner.controller.borrow_mut().dismiss();
        if dismissed {
            self.cancel_pending_reset();
            self.notify();
        }
        dismissed
    }

    /// Hard return to idle (owning view unmounted). Late results are dropped.
    pub fn reset(&self) {
        self.inner.controller.borrow_mut().reset();
        self.cancel_pending_reset();
        self.notify();
    }

    fn finish(&self, attempt: AttemptId, outcome: Result<(), SubmitFailure>) {
        let scheduled = self.inner.controller.borrow_mut().resolve(attempt, outcome);
        let Some(ScheduledReset { ticket, after }) = scheduled else {
            return;
        };
        self.arm_reset(ticket, after);
        self.notify();
    }

    fn arm_reset(&self, ticket: ResetTicket, after: Duration) {
        self.cancel_pending_reset();
        let form = Rc::downgrade(&self.inner);
        let handle = self.inner.scheduler.schedule(
            after,
            Box::new(move || {
                if let Some(inner) = form.upgrade() {
                    Self { inner }.fire_reset(ticket);
                }
            }),
        );
        *self.inner.pending_reset.borrow_mut() = Some(handle);
    }

    fn fire_reset(&self, ticket: ResetTicket) {
        self.inner.pending_reset.borrow_mut().take();
        if self.inner.controller.borrow_mut().auto_reset(ticket) {
            log::debug!("submission: auto-reset to idle");
            self.notify();
        }
    }

    fn cancel_pending_reset(&self) {
        let handle = self.inner.pending_reset.borrow_mut().take();
        if let Some(handle) = handle {
            self.inner.scheduler.cancel(handle);
        }
    }

    fn notify(&self) {
        let snapshot = self.snapshot();
        let listeners = self.inner.listeners.borrow().clone();
        for listener in listeners {
            listener(&snapshot);
        }
    }
}

#[allow(clippy::missing_fields_in_debug)]
impl<S: Scheduler, D> std::fmt::Debug for ContactForm<S, D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContactForm")
            .field("controller", &*self.inner.controller.borrow())
            .finish()
    }
}
