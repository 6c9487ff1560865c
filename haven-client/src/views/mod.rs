//! View models
//!
//! Every view is a pure function of the document and a [`ViewContext`]. None
//! of them mutates anything; the front end decides how to draw the result.
//! [`render_all`] rebuilds every view at once and is called after each change.

pub(crate) mod constants;
pub mod dashboard;
pub mod legal;
pub mod requests;
pub mod resources;
pub mod text;
pub mod users;

pub use dashboard::{DashboardView, Guidance, GuidanceItem, Stats};
pub use legal::{LegalView, QuestionCard};
pub use requests::{RequestCard, RequestsView};
pub use resources::{ResourceCard, ResourcesView};
pub use users::{UserRow, UsersView};

use haven_common::{Document, Gender, RequestStatus, Role};

use constants::{
    ACTION_ANSWER, ACTION_DELETE, ACTION_EDIT, ACTION_MARK_IN_PROGRESS, ACTION_RESOLVE,
};

/// Everything besides the document that shapes what a view shows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewContext {
    pub role: Role,
    pub gender: Gender,
    /// Search text for the resources view (title and description)
    pub resource_query: String,
    /// Search text for the requests view (name and message)
    pub request_query: String,
    /// Only show requests with this status; None shows all
    pub request_status: Option<RequestStatus>,
    /// Search text for the legal view (name, question and answer)
    pub legal_query: String,
}

/// A button on a card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardAction {
    Edit,
    Delete,
    MarkInProgress,
    Resolve,
    Answer,
}

impl CardAction {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Edit => ACTION_EDIT,
            Self::Delete => ACTION_DELETE,
            Self::MarkInProgress => ACTION_MARK_IN_PROGRESS,
            Self::Resolve => ACTION_RESOLVE,
            Self::Answer => ACTION_ANSWER,
        }
    }
}

/// Every view, rebuilt together
#[derive(Debug, Clone, PartialEq)]
pub struct Screen {
    pub dashboard: DashboardView,
    pub resources: ResourcesView,
    pub requests: RequestsView,
    pub legal: LegalView,
    pub users: UsersView,
}

/// Rebuild every view from the current document
pub fn render_all(doc: &Document, ctx: &ViewContext) -> Screen {
    Screen {
        dashboard: dashboard::render(doc, ctx),
        resources: resources::render(doc, ctx),
        requests: requests::render(doc, ctx),
        legal: legal::render(doc, ctx),
        users: users::render(doc),
    }
}
