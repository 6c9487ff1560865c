//! Legal answer validation

use std::fmt;

use super::is_forbidden_control;

/// Maximum length for an answer in characters
pub const MAX_ANSWER_LENGTH: usize = 4000;

/// Validation error for answers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerError {
    /// Answer exceeds maximum length
    TooLong,
    /// Answer contains control characters other than newline/tab
    InvalidCharacters,
}

impl fmt::Display for AnswerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooLong => write!(f, "answer must be at most {} characters", MAX_ANSWER_LENGTH),
            Self::InvalidCharacters => f.write_str("answer contains invalid characters"),
        }
    }
}

/// Validate an answer to a legal question
///
/// Note: Empty is allowed and marks the question as unanswered again.
///
/// # Errors
///
/// Returns an `AnswerError` variant describing the validation failure.
pub fn validate_answer(answer: &str) -> Result<(), AnswerError> {
    if answer.chars().count() > MAX_ANSWER_LENGTH {
        return Err(AnswerError::TooLong);
    }
    if answer.chars().any(is_forbidden_control) {
        return Err(AnswerError::InvalidCharacters);
    }
    Ok(())
}
