//! Error types returned by the store and by session operations

use haven_common::Role;
use haven_common::validators::{
    AnswerError, DescriptionError, MessageError, NameError, TitleError, UrlError,
};

use crate::storage::StorageError;

/// Failure to persist to storage
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("failed to serialize document: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A form field failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{0}")]
    Name(NameError),
    #[error("{0}")]
    Message(MessageError),
    #[error("{0}")]
    Answer(AnswerError),
    #[error("{0}")]
    Title(TitleError),
    #[error("{0}")]
    Description(DescriptionError),
    #[error("{0}")]
    Url(UrlError),
}

/// Which kind of entity a lookup failed for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Resource,
    HelpRequest,
    LegalQuestion,
}

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Entity::Resource => "Resource",
            Entity::HelpRequest => "Help request",
            Entity::LegalQuestion => "Legal question",
        })
    }
}

/// Why a session operation was refused
///
/// Whenever an operation returns an error the document is left unchanged.
#[derive(Debug, thiserror::Error)]
pub enum ActionError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("{role} cannot {action}")]
    PermissionDenied { action: &'static str, role: Role },
    #[error("{entity} not found")]
    NotFound { entity: Entity, id: String },
    #[error("could not save: {0}")]
    Store(#[from] StoreError),
}

impl ActionError {
    pub(crate) fn not_found(entity: Entity, id: &str) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }
}
