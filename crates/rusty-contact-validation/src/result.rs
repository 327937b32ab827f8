// File: src/result.rs
// Purpose: Field-keyed validation outcome

use std::collections::HashMap;

use crate::field::Field;

/// Outcome of one validation pass.
///
/// Maps each failing field to the message of its first failing rule; a
/// field with no entry is valid. Invariant: the map is empty exactly when
/// the form is submittable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    errors: HashMap<Field, String>,
}

impl ValidationResult {
    /// Create a successful validation result.
    pub fn success() -> Self {
        Self::default()
    }

    /// Create a failed validation result.
    pub fn failure(errors: HashMap<Field, String>) -> Self {
        Self { errors }
    }

    /// Check if there are any errors.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// True when every field is valid.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of failing fields.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Get the error for a specific field.
    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// Record an error for a field, replacing any earlier one.
    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    /// Remove one field's error without touching the rest. Returns whether
    /// an entry was actually removed. This is the optimistic clear applied
    /// on edit; it does not re-run the field's rule.
    pub fn clear_field(&mut self, field: Field) -> bool {
        self.errors.remove(&field).is_some()
    }

    /// Drop every recorded error.
    pub fn clear(&mut self) {
        self.errors.clear();
    }

    /// Failing fields and their messages, in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> + '_ {
        Field::ALL
            .into_iter()
            .filter_map(|field| self.error(field).map(|message| (field, message)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn success_is_empty() {
        let result = ValidationResult::success();
        assert!(result.is_empty());
        assert!(!result.has_errors());
        assert_eq!(result.len(), 0);
        assert_eq!(result.error(Field::Email), None);
    }

    #[test]
    fn clear_field_removes_only_that_entry() {
        let mut result = ValidationResult::success();
        result.insert(Field::FullName, "Name is required.");
        result.insert(Field::Email, "Email is required");

        assert!(result.clear_field(Field::FullName));
        assert!(!result.clear_field(Field::FullName));
        assert_eq!(result.error(Field::FullName), None);
        assert_eq!(result.error(Field::Email), Some("Email is required"));
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn iter_follows_display_order() {
        let mut result = ValidationResult::success();
        result.insert(Field::Message, "Message is required");
        result.insert(Field::FullName, "Name is required.");

        let fields: Vec<Field> = result.iter().map(|(field, _)| field).collect();
        assert_eq!(fields, vec![Field::FullName, Field::Message]);
    }
}
