//! # rusty-contact-validation
//!
//! Field-level validation for the contact form: the field model, the
//! per-field rule tables, and the validators those rules call.
//!
//! The whole crate is side-effect free. [`validate`] takes the raw values
//! of one form session and returns a [`ValidationResult`] mapping each
//! failing field to its first failing rule's message; an empty result
//! means the form is submittable.
//!
//! ```
//! use rusty_contact_validation::{validate, Field, FieldSet};
//!
//! let mut fields = FieldSet::default();
//! fields.set_value(Field::Email, "not-an-email");
//!
//! let result = validate(&fields);
//! assert_eq!(result.error(Field::Email), Some("Email is not valid"));
//! ```

pub mod field;
pub mod result;
pub mod rules;
pub mod validators;

pub use field::{Field, FieldSet, Subject, UnknownField, UnknownSubject};
pub use result::ValidationResult;
pub use rules::validate;
