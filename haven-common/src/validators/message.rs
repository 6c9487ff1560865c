//! Message validation
//!
//! Validates the body of a help request or a legal question. Newlines and tabs
//! are allowed so people can write more than one paragraph.

use std::fmt;

use super::is_forbidden_control;

/// Maximum length for a message in characters
pub const MAX_MESSAGE_LENGTH: usize = 2000;

/// Validation error for messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageError {
    /// Message is empty
    Empty,
    /// Message exceeds maximum length
    TooLong,
    /// Message contains control characters other than newline/tab
    InvalidCharacters,
}

impl fmt::Display for MessageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("message is required"),
            Self::TooLong => write!(
                f,
                "message must be at most {} characters",
                MAX_MESSAGE_LENGTH
            ),
            Self::InvalidCharacters => f.write_str("message contains invalid characters"),
        }
    }
}

/// Validate a request or question body
///
/// # Errors
///
/// Returns a `MessageError` variant describing the validation failure.
pub fn validate_message(message: &str) -> Result<(), MessageError> {
    if message.is_empty() {
        return Err(MessageError::Empty);
    }
    if message.chars().count() > MAX_MESSAGE_LENGTH {
        return Err(MessageError::TooLong);
    }
    if message.chars().any(is_forbidden_control) {
        return Err(MessageError::InvalidCharacters);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_messages() {
        assert!(validate_message("need shelter").is_ok());
        assert!(validate_message("line one\nline two").is_ok());
        assert!(validate_message("line one\r\n\tindented").is_ok());
        assert!(validate_message(&"a".repeat(MAX_MESSAGE_LENGTH)).is_ok());
    }

    #[test]
    fn test_empty() {
        assert_eq!(validate_message(""), Err(MessageError::Empty));
    }

    #[test]
    fn test_too_long() {
        assert_eq!(
            validate_message(&"a".repeat(MAX_MESSAGE_LENGTH + 1)),
            Err(MessageError::TooLong)
        );
    }

    #[test]
    fn test_invalid_control_characters() {
        assert_eq!(
            validate_message("Hello\0World"),
            Err(MessageError::InvalidCharacters)
        );
        assert_eq!(
            validate_message("Test\x1BEscape"),
            Err(MessageError::InvalidCharacters)
        );
    }
}
