//! Type definitions for the Haven client

mod form;
mod message;
mod ui;

// Re-export types for convenience
pub use form::{AnswerForm, Confirm, EditResourceForm, Modal, QuestionForm, RequestForm, ResourceForm};
pub use message::Message;
pub use ui::{DismissReason, Notice, View};
