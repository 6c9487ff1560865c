//! Display name validation
//!
//! Validates the "your name" field on help requests and legal questions.

use std::fmt;

/// Maximum length for a display name in characters
pub const MAX_NAME_LENGTH: usize = 64;

/// Validation error for display names
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameError {
    /// Name is empty
    Empty,
    /// Name exceeds maximum length
    TooLong,
    /// Name contains control characters (including newlines)
    InvalidCharacters,
}

impl fmt::Display for NameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("name is required"),
            Self::TooLong => write!(f, "name must be at most {} characters", MAX_NAME_LENGTH),
            Self::InvalidCharacters => f.write_str("name contains invalid characters"),
        }
    }
}

/// Validate a display name
///
/// Checks:
/// - Not empty
/// - Does not exceed maximum length (64 characters)
/// - No control characters
///
/// # Errors
///
/// Returns a `NameError` variant describing the validation failure.
pub fn validate_name(name: &str) -> Result<(), NameError> {
    if name.is_empty() {
        return Err(NameError::Empty);
    }
    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(NameError::TooLong);
    }
    if name.chars().any(char::is_control) {
        return Err(NameError::InvalidCharacters);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        assert!(validate_name("Jane").is_ok());
        assert!(validate_name("Jane Doe").is_ok());
        assert!(validate_name("J").is_ok());
        assert!(validate_name(&"a".repeat(MAX_NAME_LENGTH)).is_ok());
        assert!(validate_name("Zoë").is_ok());
    }

    #[test]
    fn test_empty() {
        assert_eq!(validate_name(""), Err(NameError::Empty));
    }

    #[test]
    fn test_too_long() {
        assert_eq!(
            validate_name(&"a".repeat(MAX_NAME_LENGTH + 1)),
            Err(NameError::TooLong)
        );
    }

    #[test]
    fn test_control_characters() {
        assert_eq!(validate_name("Jane\nDoe"), Err(NameError::InvalidCharacters));
        assert_eq!(validate_name("Jane\0"), Err(NameError::InvalidCharacters));
        assert_eq!(validate_name("\tJane"), Err(NameError::InvalidCharacters));
    }

    #[test]
    fn test_display() {
        assert_eq!(NameError::Empty.to_string(), "name is required");
    }
}
