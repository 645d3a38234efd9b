//! Review Form Validation
//!
//! Live checks only flag values that are present but too short. The
//! "required" checks run when the user tries to submit.

use std::fmt;

pub const MIN_NAME_CHARS: usize = 3;
pub const MIN_MESSAGE_CHARS: usize = 10;

/// Inline error shown next to a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    NameRequired,
    NameTooShort,
    RatingRequired,
    MessageRequired,
    MessageTooShort,
}

impl FieldError {
    pub fn message(&self) -> &'static str {
        match self {
            FieldError::NameRequired => "Name is required",
            FieldError::NameTooShort => "Name must be at least 3 characters long",
            FieldError::RatingRequired => "Please select a rating",
            FieldError::MessageRequired => "Message is required",
            FieldError::MessageTooShort => "Message must be at least 10 characters long",
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Per-field error slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FieldErrors {
    pub name: Option<FieldError>,
    pub rating: Option<FieldError>,
    pub message: Option<FieldError>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.rating.is_none() && self.message.is_none()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

fn char_len(value: &str) -> usize {
    value.trim().chars().count()
}

fn check_min_len(value: &str, min: usize, too_short: FieldError) -> Option<FieldError> {
    let len = char_len(value);
    (len > 0 && len < min).then_some(too_short)
}

fn check_required(value: &str, min: usize, required: FieldError, too_short: FieldError) -> Option<FieldError> {
    if char_len(value) == 0 {
        Some(required)
    } else {
        check_min_len(value, min, too_short)
    }
}

/// Live name check (input events)
pub fn check_name(name: &str) -> Option<FieldError> {
    check_min_len(name, MIN_NAME_CHARS, FieldError::NameTooShort)
}

/// Live message check (input events)
pub fn check_message(message: &str) -> Option<FieldError> {
    check_min_len(message, MIN_MESSAGE_CHARS, FieldError::MessageTooShort)
}

pub fn check_rating(rating: u8) -> Option<FieldError> {
    (rating == 0).then_some(FieldError::RatingRequired)
}

/// Full check run at submit time, required fields included
pub fn validate_submission(name: &str, rating: u8, message: &str) -> FieldErrors {
    FieldErrors {
        name: check_required(name, MIN_NAME_CHARS, FieldError::NameRequired, FieldError::NameTooShort),
        rating: check_rating(rating),
        message: check_required(
            message,
            MIN_MESSAGE_CHARS,
            FieldError::MessageRequired,
            FieldError::MessageTooShort,
        ),
    }
}

/// Basic-variant gate: every field filled in, no length rules
pub fn is_complete(name: &str, rating: u8, message: &str) -> bool {
    !name.trim().is_empty() && !message.trim().is_empty() && rating > 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_live_checks_ignore_empty_fields() {
        assert_eq!(check_name(""), None);
        assert_eq!(check_name("   "), None);
        assert_eq!(check_message(""), None);
    }

    #[test]
    fn test_live_checks_flag_short_values() {
        assert_eq!(check_name("Al"), Some(FieldError::NameTooShort));
        assert_eq!(check_name("Ali"), None);
        assert_eq!(check_message("Too short"), Some(FieldError::MessageTooShort));
        assert_eq!(check_message("Long enough"), None);
        // Length is measured after trimming
        assert_eq!(check_name("  Al  "), Some(FieldError::NameTooShort));
    }

    #[test]
    fn test_submission_requires_everything() {
        let errors = validate_submission("", 0, "");
        assert_eq!(errors.name, Some(FieldError::NameRequired));
        assert_eq!(errors.rating, Some(FieldError::RatingRequired));
        assert_eq!(errors.message, Some(FieldError::MessageRequired));

        let errors = validate_submission("Ada", 3, "Hello");
        assert_eq!(errors.name, None);
        assert_eq!(errors.rating, None);
        assert_eq!(errors.message, Some(FieldError::MessageTooShort));
        assert_eq!(
            errors.message.map(|e| e.to_string()).as_deref(),
            Some("Message must be at least 10 characters long")
        );

        assert!(validate_submission("Ada", 3, "Hello there!").is_empty());
    }

    #[test]
    fn test_basic_gate() {
        assert!(is_complete("A", 1, "B"));
        assert!(!is_complete("A", 0, "B"));
        assert!(!is_complete(" ", 5, "B"));
        assert!(!is_complete("A", 5, ""));
    }

    #[test]
    fn test_multibyte_characters_count_once() {
        assert_eq!(check_name("Zoë"), None);
        assert_eq!(check_name("李雷"), Some(FieldError::NameTooShort));
    }
}
