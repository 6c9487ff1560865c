//! Modal form state
//!
//! A modal holds the raw field text exactly as typed. Trimming and validation
//! happen on submit, so a refused submit leaves the input intact.

use haven_common::{Gender, Resource, ResourceKind};

use crate::session::{NewResource, ResourceEdit};

// =============================================================================
// Request & Question Forms
// =============================================================================

/// "Request help" form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestForm {
    pub name: String,
    pub message: String,
}

/// "Ask a legal question" form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionForm {
    pub name: String,
    pub question: String,
}

/// Answer form for one legal question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerForm {
    pub question_id: String,
    /// The question being answered, for display
    pub question: String,
    /// Starts as the existing answer
    pub answer: String,
}

// =============================================================================
// Resource Forms
// =============================================================================

/// "Add resource" form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceForm {
    pub kind: ResourceKind,
    pub title: String,
    pub gender: Gender,
    pub description: String,
    pub url: String,
    pub contact: String,
}

impl Default for ResourceForm {
    fn default() -> Self {
        Self {
            kind: ResourceKind::Legal,
            title: String::new(),
            gender: Gender::All,
            description: String::new(),
            url: String::new(),
            contact: String::new(),
        }
    }
}

impl ResourceForm {
    pub fn to_new_resource(&self) -> NewResource {
        NewResource {
            title: self.title.clone(),
            gender: self.gender,
            description: self.description.clone(),
            url: self.url.clone(),
            contact: self.contact.clone(),
        }
    }
}

/// "Edit resource" form, prefilled from the resource
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditResourceForm {
    pub id: String,
    pub title: String,
    pub gender: Gender,
    pub description: String,
    pub url: String,
}

impl EditResourceForm {
    pub fn from_resource(resource: &Resource) -> Self {
        Self {
            id: resource.id.clone(),
            title: resource.title.clone(),
            gender: resource.gender,
            description: resource.description.clone(),
            url: resource.url.clone().unwrap_or_default(),
        }
    }

    pub fn to_edit(&self) -> ResourceEdit {
        ResourceEdit {
            title: self.title.clone(),
            gender: self.gender,
            description: self.description.clone(),
            url: self.url.clone(),
        }
    }
}

// =============================================================================
// Confirmations
// =============================================================================

/// Destructive actions that need a yes/no confirmation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Confirm {
    DeleteResource { id: String, title: String },
    Reset,
    Clear,
}

impl Confirm {
    /// Question shown in the confirmation dialog
    pub fn prompt(&self) -> String {
        match self {
            Confirm::DeleteResource { title, .. } => format!("Delete resource \"{}\"?", title),
            Confirm::Reset => "Reset to default sample data?".to_string(),
            Confirm::Clear => "Clear local data? This cannot be undone.".to_string(),
        }
    }
}

// =============================================================================
// Modal
// =============================================================================

/// The currently open modal, if any
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    NewRequest(RequestForm),
    NewQuestion(QuestionForm),
    AddResource(ResourceForm),
    EditResource(EditResourceForm),
    AnswerQuestion(AnswerForm),
    Confirm(Confirm),
}

impl Modal {
    /// Modal heading
    pub fn title(&self) -> &'static str {
        match self {
            Modal::NewRequest(_) => "Request Help",
            Modal::NewQuestion(_) => "Ask a Legal Question",
            Modal::AddResource(_) => "Add Resource",
            Modal::EditResource(_) => "Edit Resource",
            Modal::AnswerQuestion(_) => "Answer Question",
            Modal::Confirm(_) => "Confirm",
        }
    }
}
