//! UI state types: navigation, notices, modal dismissal

use std::fmt;

// =============================================================================
// Navigation
// =============================================================================

/// Top-level view selected in the navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Dashboard,
    Resources,
    Requests,
    Legal,
    /// Admin only
    Users,
}

impl View {
    pub fn label(&self) -> &'static str {
        match self {
            View::Dashboard => "Dashboard",
            View::Resources => "Resources",
            View::Requests => "Help Requests",
            View::Legal => "Legal Q&A",
            View::Users => "Users",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Notices
// =============================================================================

/// One-line feedback shown after an action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Confirmation of a completed action
    Info(String),
    /// The action was refused or failed; nothing changed
    Error(String),
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self::Info(text.into())
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::Error(text.into())
    }

    pub fn text(&self) -> &str {
        match self {
            Self::Info(text) | Self::Error(text) => text,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

// =============================================================================
// Modal Dismissal
// =============================================================================

/// How a modal was closed without submitting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissReason {
    /// Cancel button
    Cancel,
    /// Click outside the modal card
    Backdrop,
    /// Escape key
    Escape,
}
