//! Interactive behavior for the firm's single-page site.
//!
//! This crate has no browser dependencies. It owns the two pieces of the page
//! that make decisions: the one-shot viewport reveal latch and the contact
//! form submission state machine. Platform services (viewport intersection
//! notifications, timers, HTTP delivery) enter through traits so the browser
//! glue in the site crate stays thin and everything here is testable natively.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`visibility`] | [`visibility::VisibilityWatcher`] and its one-shot latch |
//! | [`options`] | Threshold, root margin and observe options |
//! | [`contact`] | Form fields, payload and boundary validation |
//! | [`submission`] | [`submission::SubmissionController`] state machine |
//! | [`schedule`] | Cancellable delayed-task abstraction |
//! | [`form`] | [`form::ContactForm`] driver wiring controller, timer and delivery |

pub mod contact;
pub mod form;
pub mod options;
pub mod schedule;
pub mod submission;
pub mod visibility;

pub use contact::{ContactFields, ContactPayload, Field, ValidationError};
pub use form::{ContactForm, Delivery, FormSnapshot};
pub use options::{MarginLength, ObserveOptions, OptionsError, RootMargin, Threshold};
pub use schedule::Scheduler;
pub use submission::{SubmissionController, SubmitFailure, SubmitRejected, SubmitStatus};
pub use visibility::{IntersectionEntry, IntersectionPrimitive, PrimitiveUnavailable, VisibilityLatch, VisibilityWatcher};
