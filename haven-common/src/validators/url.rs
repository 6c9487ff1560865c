//! Resource link validation
//!
//! Links are free-form (`https://`, `tel:`, or a bare `#` placeholder), so only
//! length and whitespace are checked.

use std::fmt;

/// Maximum length for a link in characters
pub const MAX_URL_LENGTH: usize = 2048;

/// Validation error for resource links
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlError {
    /// Link exceeds maximum length
    TooLong,
    /// Link contains whitespace or control characters
    InvalidCharacters,
}

impl fmt::Display for UrlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooLong => write!(f, "link must be at most {} characters", MAX_URL_LENGTH),
            Self::InvalidCharacters => f.write_str("link must not contain spaces"),
        }
    }
}

/// Validate a resource link
///
/// Note: Empty is allowed (no link).
///
/// # Errors
///
/// Returns a `UrlError` variant describing the validation failure.
pub fn validate_url(url: &str) -> Result<(), UrlError> {
    if url.chars().count() > MAX_URL_LENGTH {
        return Err(UrlError::TooLong);
    }
    if url.chars().any(|ch| ch.is_whitespace() || ch.is_control()) {
        return Err(UrlError::InvalidCharacters);
    }
    Ok(())
}
