//! Contact form submission state machine.
//!
//! DESIGN
//! ======
//! ```text
//!   idle ──submit──▶ submitting ──ok──▶ success ──┐
//!    ▲                    │                        │ dismiss / auto-reset
//!    │                    └────err──▶ error ───────┤
//!    └─────────────────────────────────────────────┘
//! ```
//! The controller does no I/O. `begin_submit` hands back the payload with an
//! [`AttemptId`]; the caller delivers it and reports back via `resolve`.
//! Entering a terminal state yields a [`ScheduledReset`] whose ticket the
//! caller passes to `auto_reset` when its timer fires.
//!
//! TRADE-OFFS
//! ==========
//! Attempt ids and reset tickets are generation counters. A resolution for an
//! attempt that is no longer current, or a timer for a terminal state that
//! was already left, is discarded instead of being applied out of order.

#[cfg(test)]
#[path = "submission_test.rs"]
mod submission_test;

use std::time::Duration;

use crate::contact::{ContactFields, ContactPayload, Field, ValidationError};

/// Default delay before a terminal state returns to idle on its own.
pub const DEFAULT_RESET_AFTER: Duration = Duration::from_secs(8);

/// Lifecycle of a single form submission.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

impl SubmitStatus {
    /// Success and error return to idle instead of staying put.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Success | Self::Error)
    }

    /// The submit control is disabled only while an attempt is in flight.
    #[must_use]
    pub fn accepts_submit(self) -> bool {
        !matches!(self, Self::Submitting)
    }
}

/// Why delivery of a submission failed. Always user-visible and recoverable.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubmitFailure {
    /// The endpoint answered with a non-success status.
    #[error("submission rejected with status {status}")]
    Rejected { status: u16 },
    /// The request never completed at the transport level.
    #[error("network error: {0}")]
    Network(String),
    /// No answer within the configured timeout.
    #[error("submission timed out after {}ms", .0.as_millis())]
    TimedOut(Duration),
    /// Delivery is not possible in this environment.
    #[error("submission delivery is unavailable")]
    Unavailable,
    /// Anything unexpected while preparing or dispatching the attempt.
    #[error("unexpected fault: {0}")]
    Fault(String),
}

/// Why a submit trigger was refused before any attempt started.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubmitRejected {
    #[error("a submission is already in flight")]
    InFlight,
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// Identifies one submission attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AttemptId(u64);

/// Identifies the auto-reset armed by one terminal state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ResetTicket(u64);

/// An accepted submit: deliver `payload`, then call `resolve(attempt, ..)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingSubmission {
    pub attempt: AttemptId,
    pub payload: ContactPayload,
}

/// Arm a timer for `after`, then call `auto_reset(ticket)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScheduledReset {
    pub ticket: ResetTicket,
    pub after: Duration,
}

/// Owns the status and fields of one contact form.
#[derive(Clone, Debug)]
pub struct SubmissionController {
    status: SubmitStatus,
    fields: ContactFields,
    failure: Option<SubmitFailure>,
    reset_after: Duration,
    attempt_seq: u64,
    current_attempt: Option<AttemptId>,
    reset_seq: u64,
}

impl Default for SubmissionController {
    fn default() -> Self {
        Self::new(DEFAULT_RESET_AFTER)
    }
}

impl SubmissionController {
    #[must_use]
    pub fn new(reset_after: Duration) -> Self {
        Self {
            status: SubmitStatus::Idle,
            fields: ContactFields::default(),
            failure: None,
            reset_after,
            attempt_seq: 0,
            current_attempt: None,
            reset_seq: 0,
        }
    }

    #[must_use]
    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    #[must_use]
    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    /// Failure behind the current `Error` state, if any.
    #[must_use]
    pub fn failure(&self) -> Option<&SubmitFailure> {
        self.failure.as_ref()
    }

    #[must_use]
    pub fn reset_after(&self) -> Duration {
        self.reset_after
    }

    pub fn set_field(&mut self, field: Field, value: String) {
        self.fields.set(field, value);
    }

    /// Start a submission attempt.
    ///
    /// From a terminal state the controller first settles to idle, which
    /// invalidates that state's pending auto-reset.
    ///
    /// # Errors
    ///
    /// [`SubmitRejected::InFlight`] while submitting; [`SubmitRejected::Invalid`]
    /// when the fields fail validation. Neither changes state.
    pub fn begin_submit(&mut self) -> Result<PendingSubmission, SubmitRejected> {
        if !self.status.accepts_submit() {
            return Err(SubmitRejected::InFlight);
        }
        let payload = ContactPayload::from_fields(&self.fields)?;
        if self.status.is_terminal() {
            self.settle_idle();
        }

        self.attempt_seq += 1;
        let attempt = AttemptId(self.attempt_seq);
        self.current_attempt = Some(attempt);
        self.status = SubmitStatus::Submitting;
        log::debug!("submission: attempt {} started", self.attempt_seq);
        Ok(PendingSubmission { attempt, payload })
    }

    /// Apply the outcome of a delivery attempt.
    ///
    /// Returns the auto-reset to arm, or `None` when the resolution is stale
    /// (the controller moved on since `attempt` began) and was discarded.
    pub fn resolve(&mut self, attempt: AttemptId, outcome: Result<(), SubmitFailure>) -> Option<ScheduledReset> {
        if self.status != SubmitStatus::Submitting || self.current_attempt != Some(attempt) {
            log::debug!("submission: discarding stale resolution for attempt {}", attempt.0);
            return None;
        }
        self.current_attempt = None;
        match outcome {
            Ok(()) => {
                self.status = SubmitStatus::Success;
                self.fields.clear();
                self.failure = None;
                log::info!("submission: attempt {} delivered", attempt.0);
            }
            Err(failure) => {
                log::warn!("submission: attempt {} failed: {failure}", attempt.0);
                self.status = SubmitStatus::Error;
                self.failure = Some(failure);
            }
        }
        self.reset_seq += 1;
        Some(ScheduledReset { ticket: ResetTicket(self.reset_seq), after: self.reset_after })
    }

    /// Timer-driven return to idle. Ignored unless `ticket` belongs to the
    /// terminal state the controller is still in.
    pub fn auto_reset(&mut self, ticket: ResetTicket) -> bool {
        if !self.status.is_terminal() || ticket.0 != self.reset_seq {
            return false;
        }
        self.settle_idle();
        true
    }

    /// User dismissal of the success/error message. No-op unless terminal.
    pub fn dismiss(&mut self) -> bool {
        if !self.status.is_terminal() {
            return false;
        }
        self.settle_idle();
        true
    }

    /// Return to idle from any state, orphaning any in-flight attempt.
    /// Fields are kept.
    pub fn reset(&mut self) {
        self.current_attempt = None;
        self.settle_idle();
    }

    fn settle_idle(&mut self) {
        self.status = SubmitStatus::Idle;
        self.failure = None;
        self.reset_seq += 1;
    }
}
