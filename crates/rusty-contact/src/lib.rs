//! # rusty-contact
//!
//! The contact-form engine: per-field validation with precise, field-keyed
//! error messages, and a submission controller that drives the
//! `Idle → Submitting → Success → Idle` lifecycle.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use rusty_contact::{Field, SubmissionController, Subject, Transport};
//!
//! let controller = SubmissionController::new();
//!
//! // The presentation layer forwards keystrokes and selections...
//! controller.on_field_change(Field::FullName, "Al");
//! controller.on_field_change(Field::Email, "al@x.com");
//! controller.on_field_change(Field::Subject, Subject::General.as_str());
//! controller.on_field_change(Field::Message, "This is a long enough message.");
//!
//! // ...and submits through whatever Transport it wires up.
//! controller.attempt_submit(&my_transport).await;
//! ```
//!
//! ## Architecture
//!
//! This crate is a convenience wrapper that re-exports two component
//! crates:
//!
//! - **`rusty-contact-validation`** - The field model and the pure,
//!   rule-table-driven validator.
//! - **`rusty-contact-engine`** - The submission controller, status
//!   machine, and transport boundary.
//!
//! Most users should use this parent crate. The validation crate stands
//! alone for callers that only need the rules.

pub use rusty_contact_engine::{
    ControllerConfig, SubmissionController, SubmissionStatus, Transport,
};
pub use rusty_contact_validation::{
    validate, Field, FieldSet, Subject, UnknownField, UnknownSubject, ValidationResult,
};
