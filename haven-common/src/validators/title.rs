//! Resource title validation

use std::fmt;

/// Maximum length for a resource title in characters
pub const MAX_TITLE_LENGTH: usize = 200;

/// Validation error for resource titles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleError {
    /// Title is empty
    Empty,
    /// Title exceeds maximum length
    TooLong,
    /// Title contains newline characters
    ContainsNewlines,
    /// Title contains other control characters
    InvalidCharacters,
}

impl fmt::Display for TitleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("title is required"),
            Self::TooLong => write!(f, "title must be at most {} characters", MAX_TITLE_LENGTH),
            Self::ContainsNewlines => f.write_str("title must be a single line"),
            Self::InvalidCharacters => f.write_str("title contains invalid characters"),
        }
    }
}

/// Validate a resource title
///
/// Checks:
/// - Not empty
/// - Does not exceed maximum length (200 characters)
/// - No control characters (newlines reported separately)
///
/// # Errors
///
/// Returns a `TitleError` variant describing the validation failure.
pub fn validate_title(title: &str) -> Result<(), TitleError> {
    if title.is_empty() {
        return Err(TitleError::Empty);
    }
    if title.chars().count() > MAX_TITLE_LENGTH {
        return Err(TitleError::TooLong);
    }
    for ch in title.chars() {
        if ch.is_control() {
            if ch == '\n' || ch == '\r' {
                return Err(TitleError::ContainsNewlines);
            }
            return Err(TitleError::InvalidCharacters);
        }
    }
    Ok(())
}
