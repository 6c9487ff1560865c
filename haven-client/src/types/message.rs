//! Message types for the Elm-style architecture

use haven_common::{Gender, RequestStatus, ResourceKind, Role};

use super::ui::{DismissReason, View};

/// Messages that drive the application state machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // ==================== Selectors & Navigation ====================
    /// Role selector changed
    RoleSelected(Role),
    /// Gender selector changed
    GenderSelected(Gender),
    /// Navigation item pressed
    Navigate(View),

    // ==================== Search & Filters ====================
    /// Resources view: search text changed
    ResourceSearchChanged(String),
    /// Requests view: search text changed
    RequestSearchChanged(String),
    /// Requests view: status filter changed (None shows all)
    RequestStatusFilterChanged(Option<RequestStatus>),
    /// Legal view: search text changed
    LegalSearchChanged(String),

    // ==================== Opening Modals ====================
    /// "Request help" pressed
    OpenNewRequest,
    /// "Ask a legal question" pressed
    OpenNewQuestion,
    /// "Add resource" pressed (Admin only)
    OpenAddResource,
    /// Resource card: Edit pressed
    OpenEditResource(String),
    /// Resource card: Delete pressed
    OpenDeleteResource(String),
    /// Legal card: Answer pressed
    OpenAnswerQuestion(String),
    /// "Reset to sample data" pressed
    OpenReset,
    /// "Clear local data" pressed
    OpenClear,

    // ==================== Form Fields ====================
    /// Request or question form: name field changed
    FormNameChanged(String),
    /// Request form: message field changed
    FormMessageChanged(String),
    /// Question form: question field changed
    FormQuestionChanged(String),
    /// Answer form: answer field changed
    FormAnswerChanged(String),
    /// Add resource form: target list changed
    FormKindChanged(ResourceKind),
    /// Resource form: title field changed
    FormTitleChanged(String),
    /// Resource form: gender changed
    FormGenderChanged(Gender),
    /// Resource form: description field changed
    FormDescriptionChanged(String),
    /// Resource form: link field changed
    FormUrlChanged(String),
    /// Add resource form: contact field changed
    FormContactChanged(String),

    // ==================== Modal Actions ====================
    /// Submit (or confirm) the open modal
    SubmitModal,
    /// Close the open modal without submitting
    DismissModal(DismissReason),

    // ==================== Card Actions ====================
    /// Request card: status action pressed
    SetRequestStatus { id: String, status: RequestStatus },

    // ==================== Sync ====================
    /// Another tab may have written to storage
    StorageChanged,
    /// Close the notice
    DismissNotice,
}
