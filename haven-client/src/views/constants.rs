//! Fixed text shown by the views
//!
//! Kept in one place so the view models and the text renderer agree.

// =============================================================================
// Dashboard
// =============================================================================

/// Guidance headline when no specific gender is selected
pub(crate) const GUIDANCE_HEADLINE_ALL: &str =
    "Guidance across genders — choose a specific gender for tailored advice.";

/// Prefix of the guidance headline for a specific gender
pub(crate) const GUIDANCE_HEADLINE_TAILORED: &str = "Tailored guidance for";

// =============================================================================
// Empty States
// =============================================================================

/// Shown when no help request matches the filters
pub(crate) const NO_REQUESTS_TEXT: &str = "No requests found.";

/// Shown when no legal question matches the search
pub(crate) const NO_QUESTIONS_TEXT: &str = "No legal questions yet.";

/// Shown in place of an answer on an unanswered question
pub(crate) const NO_ANSWER_TEXT: &str = "No answer yet.";

// =============================================================================
// Card Actions
// =============================================================================

pub(crate) const ACTION_EDIT: &str = "Edit";
pub(crate) const ACTION_DELETE: &str = "Delete";
pub(crate) const ACTION_MARK_IN_PROGRESS: &str = "Mark In Progress";
pub(crate) const ACTION_RESOLVE: &str = "Resolve";
pub(crate) const ACTION_ANSWER: &str = "Answer";
