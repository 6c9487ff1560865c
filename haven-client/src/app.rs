//! Application state and the update/view cycle
//!
//! [`HavenApp`] follows the Elm architecture: every user action arrives as a
//! [`Message`], [`HavenApp::update`] applies it (through the handlers in
//! `handlers/`), and [`HavenApp::view`] rebuilds the view models from
//! scratch. Front ends only ever feed messages in and draw what comes out.

use haven_common::RequestStatus;

use crate::session::Session;
use crate::types::{Message, Modal, Notice, View};
use crate::views::{Screen, ViewContext, render_all};

/// One tab's UI state on top of its [`Session`]
#[derive(Debug)]
pub struct HavenApp {
    pub(crate) session: Session,
    pub(crate) view: View,
    pub(crate) modal: Option<Modal>,
    pub(crate) notice: Option<Notice>,
    pub(crate) resource_query: String,
    pub(crate) request_query: String,
    pub(crate) request_status: Option<RequestStatus>,
    pub(crate) legal_query: String,
}

impl HavenApp {
    pub fn new(session: Session) -> Self {
        Self {
            session,
            view: View::default(),
            modal: None,
            notice: None,
            resource_query: String::new(),
            request_query: String::new(),
            request_status: None,
            legal_query: String::new(),
        }
    }

    /// Apply one message
    pub fn update(&mut self, message: Message) {
        match message {
            // Selectors and navigation
            Message::RoleSelected(role) => self.handle_role_selected(role),
            Message::GenderSelected(gender) => self.handle_gender_selected(gender),
            Message::Navigate(view) => self.handle_navigate(view),

            // Search and filters
            Message::ResourceSearchChanged(query) => self.resource_query = query,
            Message::RequestSearchChanged(query) => self.request_query = query,
            Message::RequestStatusFilterChanged(status) => self.request_status = status,
            Message::LegalSearchChanged(query) => self.legal_query = query,

            // Opening modals
            Message::OpenNewRequest => self.handle_open_new_request(),
            Message::OpenNewQuestion => self.handle_open_new_question(),
            Message::OpenAddResource => self.handle_open_add_resource(),
            Message::OpenEditResource(id) => self.handle_open_edit_resource(&id),
            Message::OpenDeleteResource(id) => self.handle_open_delete_resource(&id),
            Message::OpenAnswerQuestion(id) => self.handle_open_answer_question(&id),
            Message::OpenReset => self.handle_open_reset(),
            Message::OpenClear => self.handle_open_clear(),

            // Form fields
            Message::FormNameChanged(value) => self.handle_form_name_changed(value),
            Message::FormMessageChanged(value) => self.handle_form_message_changed(value),
            Message::FormQuestionChanged(value) => self.handle_form_question_changed(value),
            Message::FormAnswerChanged(value) => self.handle_form_answer_changed(value),
            Message::FormKindChanged(kind) => self.handle_form_kind_changed(kind),
            Message::FormTitleChanged(value) => self.handle_form_title_changed(value),
            Message::FormGenderChanged(gender) => self.handle_form_gender_changed(gender),
            Message::FormDescriptionChanged(value) => {
                self.handle_form_description_changed(value)
            }
            Message::FormUrlChanged(value) => self.handle_form_url_changed(value),
            Message::FormContactChanged(value) => self.handle_form_contact_changed(value),

            // Modal actions
            Message::SubmitModal => self.handle_submit_modal(),
            Message::DismissModal(reason) => self.handle_dismiss_modal(reason),

            // Card actions
            Message::SetRequestStatus { id, status } => self.handle_set_request_status(&id, status),

            // Sync
            Message::StorageChanged => self.handle_storage_changed(),
            Message::DismissNotice => self.notice = None,
        }
    }

    /// Rebuild every view model
    pub fn view(&self) -> Screen {
        render_all(self.session.document(), &self.context())
    }

    /// Role, gender and filter state the views are built with
    pub fn context(&self) -> ViewContext {
        ViewContext {
            role: self.session.role(),
            gender: self.session.gender(),
            resource_query: self.resource_query.clone(),
            request_query: self.request_query.clone(),
            request_status: self.request_status,
            legal_query: self.legal_query.clone(),
        }
    }

    // ==================== Accessors ====================

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn active_view(&self) -> View {
        self.view
    }

    pub fn modal(&self) -> Option<&Modal> {
        self.modal.as_ref()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }
}
