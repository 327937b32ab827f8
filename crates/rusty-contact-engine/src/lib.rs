//! # rusty-contact-engine
//!
//! Submission lifecycle for the contact form: a [`SubmissionController`]
//! that owns the field values, runs the validation crate over them, and
//! drives the `Idle → Submitting → Success → Idle` status machine,
//! including the timed dismissal of the success banner.
//!
//! The presentation layer reads snapshots (`fields`, `errors`, `status`)
//! and mutates only through `on_field_change`, `attempt_submit`, and
//! `cancel_success_banner`. Accepted submissions are handed to a
//! [`Transport`] implementation; the engine never talks to the network
//! itself.

pub mod controller;
pub mod status;
pub mod transport;

pub use controller::{ControllerConfig, SubmissionController};
pub use status::SubmissionStatus;
pub use transport::Transport;
