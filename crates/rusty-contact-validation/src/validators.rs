// File: src/validators.rs
// Purpose: Leaf predicates shared by the rule tables

use once_cell::sync::Lazy;
use regex::Regex;

// Email validation regex
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap()
});

/// Validate email format.
///
/// Callers pass the raw, untrimmed value; see `rules::Check::EmailFormat`.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Strips every non-digit character (spaces, dashes, parentheses, ...).
pub fn digits_only(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Character count of the trimmed value. Leading and trailing whitespace
/// never counts toward a length rule.
pub fn trimmed_char_count(value: &str) -> usize {
    value.trim().chars().count()
}

/// Whether the value names one of the fixed subject choices.
pub fn is_known_subject(value: &str) -> bool {
    value.parse::<crate::field::Subject>().is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_emails() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("test.user@example.co.uk"));
        assert!(is_valid_email("user+tag@example.com"));
        assert!(is_valid_email("a@b.co"));
    }

    #[test]
    fn invalid_emails() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@example.c"));
        assert!(!is_valid_email("user example@example.com"));
        // Surrounding whitespace fails the anchored pattern.
        assert!(!is_valid_email(" user@example.com "));
    }

    #[test]
    fn digit_stripping() {
        assert_eq!(digits_only("123-456-7890"), "1234567890");
        assert_eq!(digits_only("(123) 456 7890"), "1234567890");
        assert_eq!(digits_only("no digits"), "");
    }

    #[test]
    fn trimmed_counts() {
        assert_eq!(trimmed_char_count("  Al  "), 2);
        assert_eq!(trimmed_char_count("   "), 0);
        assert_eq!(trimmed_char_count("héllo"), 5);
    }

    #[test]
    fn known_subjects() {
        assert!(is_known_subject("general"));
        assert!(is_known_subject("other"));
        assert!(!is_known_subject(""));
        assert!(!is_known_subject("General"));
    }
}
