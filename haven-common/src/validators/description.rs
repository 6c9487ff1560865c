//! Resource description validation

use std::fmt;

use super::is_forbidden_control;

/// Maximum length for a resource description in characters
pub const MAX_DESCRIPTION_LENGTH: usize = 2000;

/// Validation error for resource descriptions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescriptionError {
    /// Description exceeds maximum length
    TooLong,
    /// Description contains control characters other than newline/tab
    InvalidCharacters,
}

impl fmt::Display for DescriptionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooLong => write!(
                f,
                "description must be at most {} characters",
                MAX_DESCRIPTION_LENGTH
            ),
            Self::InvalidCharacters => f.write_str("description contains invalid characters"),
        }
    }
}

/// Validate a resource description
///
/// Note: Empty is allowed.
///
/// # Errors
///
/// Returns a `DescriptionError` variant describing the validation failure.
pub fn validate_description(description: &str) -> Result<(), DescriptionError> {
    if description.chars().count() > MAX_DESCRIPTION_LENGTH {
        return Err(DescriptionError::TooLong);
    }
    if description.chars().any(is_forbidden_control) {
        return Err(DescriptionError::InvalidCharacters);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_descriptions() {
        assert!(validate_description("").is_ok());
        assert!(validate_description("Confidential 24/7 support.").is_ok());
        assert!(validate_description("a\nb").is_ok());
    }

    #[test]
    fn test_too_long() {
        assert_eq!(
            validate_description(&"a".repeat(MAX_DESCRIPTION_LENGTH + 1)),
            Err(DescriptionError::TooLong)
        );
    }

    #[test]
    fn test_invalid_control_characters() {
        assert_eq!(
            validate_description("a\0b"),
            Err(DescriptionError::InvalidCharacters)
        );
    }
}
