// File: src/field.rs
// Purpose: Field identifiers, subject choices, and the raw field set

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier for one field of the contact form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FullName,
    Email,
    Phone,
    Subject,
    Message,
}

impl Field {
    /// Every field, in display order.
    pub const ALL: [Field; 5] = [
        Field::FullName,
        Field::Email,
        Field::Phone,
        Field::Subject,
        Field::Message,
    ];

    /// Wire name used by the presentation layer (the input `name` attribute).
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::FullName => "fullName",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }

    /// Phone is the only optional field.
    pub fn is_required(&self) -> bool {
        !matches!(self, Field::Phone)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown form field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fullName" => Ok(Field::FullName),
            "email" => Ok(Field::Email),
            "phone" => Ok(Field::Phone),
            "subject" => Ok(Field::Subject),
            "message" => Ok(Field::Message),
            other => Err(UnknownField(other.to_string())),
        }
    }
}

/// The fixed set of subject choices offered by the form's select input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Subject {
    General,
    Support,
    Feedback,
    Business,
    Other,
}

impl Subject {
    /// Every choice, in the order the select input lists them.
    pub const ALL: [Subject; 5] = [
        Subject::General,
        Subject::Support,
        Subject::Feedback,
        Subject::Business,
        Subject::Other,
    ];

    /// Option value submitted by the select input.
    pub fn as_str(&self) -> &'static str {
        match self {
            Subject::General => "general",
            Subject::Support => "support",
            Subject::Feedback => "feedback",
            Subject::Business => "business",
            Subject::Other => "other",
        }
    }

    /// Human-readable option label.
    pub fn label(&self) -> &'static str {
        match self {
            Subject::General => "General Inquiry",
            Subject::Support => "Technical Support",
            Subject::Feedback => "Feedback",
            Subject::Business => "Business Proposal",
            Subject::Other => "Other",
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown subject choice: {0}")]
pub struct UnknownSubject(pub String);

impl FromStr for Subject {
    type Err = UnknownSubject;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Subject::ALL
            .into_iter()
            .find(|subject| subject.as_str() == s)
            .ok_or_else(|| UnknownSubject(s.to_string()))
    }
}

/// Raw text values for one form session.
///
/// Created empty, mutated one field at a time as the user types, and
/// cleared wholesale after a successful submission. Values are stored
/// exactly as entered; trimming happens inside the rules that need it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FieldSet {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
}

impl FieldSet {
    /// Raw value of one field.
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::FullName => &self.full_name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    /// Overwrites one field's raw value.
    pub fn set_value(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::FullName => &mut self.full_name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        };
        *slot = value.into();
    }

    /// Resets every field to empty.
    pub fn clear(&mut self) {
        *self = FieldSet::default();
    }

    /// True when no field holds any input.
    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|field| self.value(*field).is_empty())
    }
}
