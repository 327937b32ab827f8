// File: src/rules.rs
// Purpose: Ordered per-field rule tables and the validation pass

use crate::field::{Field, FieldSet};
use crate::result::ValidationResult;
use crate::validators;

/// One constraint a field's raw value must satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    /// Trimmed value must be non-empty.
    RequiredTrimmed,
    /// Trimmed value must have at least this many characters.
    MinCharsTrimmed(usize),
    /// Trimmed value must have at most this many characters.
    MaxCharsTrimmed(usize),
    /// Raw, untrimmed value must match the email pattern. The shipped form
    /// trims for the required check but matches the raw value here; kept.
    EmailFormat,
    /// Blank values pass (optional field); anything else must reduce to
    /// exactly this many digits once non-digit characters are stripped.
    PhoneDigits(usize),
    /// Value must be one of the fixed subject choices.
    SubjectChoice,
}

impl Check {
    fn passes(self, raw: &str) -> bool {
        match self {
            Check::RequiredTrimmed => !raw.trim().is_empty(),
            Check::MinCharsTrimmed(min) => validators::trimmed_char_count(raw) >= min,
            Check::MaxCharsTrimmed(max) => validators::trimmed_char_count(raw) <= max,
            Check::EmailFormat => validators::is_valid_email(raw),
            Check::PhoneDigits(count) => {
                raw.trim().is_empty() || validators::digits_only(raw).len() == count
            }
            Check::SubjectChoice => validators::is_known_subject(raw),
        }
    }
}

/// Ordered rule list per field. The first failing check wins; no further
/// checks run for that field, so a field never carries more than one
/// message.
const RULES: &[(Field, &[(Check, &str)])] = &[
    (
        Field::FullName,
        &[
            (Check::RequiredTrimmed, "Name is required."),
            (
                Check::MinCharsTrimmed(2),
                "Full name must be at least 2 characters.",
            ),
            // Message text matches the shipped form, count mismatch included.
            (
                Check::MaxCharsTrimmed(34),
                "Your name can't be greater than 35 character.",
            ),
        ],
    ),
    (
        Field::Email,
        &[
            (Check::RequiredTrimmed, "Email is required"),
            (Check::EmailFormat, "Email is not valid"),
        ],
    ),
    (
        Field::Phone,
        &[(Check::PhoneDigits(10), "Phone number must be 10 digits")],
    ),
    (
        Field::Subject,
        &[(Check::SubjectChoice, "Please select a subject")],
    ),
    (
        Field::Message,
        &[
            (Check::RequiredTrimmed, "Message is required"),
            (
                Check::MinCharsTrimmed(12),
                "Message must be at least 12 characters",
            ),
            (
                Check::MaxCharsTrimmed(500),
                "Message cannot exceed 500 characters",
            ),
        ],
    ),
];

/// Runs every field's rule list against the set.
///
/// Pure and total: any combination of raw values produces a result, never
/// an error. Missing or empty values are ordinary inputs.
pub fn validate(fields: &FieldSet) -> ValidationResult {
    let mut result = ValidationResult::success();
    for (field, checks) in RULES {
        let raw = fields.value(*field);
        for (check, message) in *checks {
            if !check.passes(raw) {
                result.insert(*field, *message);
                break;
            }
        }
    }
    result
}
