//! Modal open, field edit and dismiss handlers

use haven_common::{Gender, ResourceKind};

use crate::app::HavenApp;
use crate::types::{
    AnswerForm, Confirm, DismissReason, EditResourceForm, Modal, Notice, QuestionForm,
    RequestForm, ResourceForm,
};

impl HavenApp {
    // ==================== Opening ====================

    fn open_modal(&mut self, modal: Modal) {
        tracing::debug!(modal = modal.title(), "modal opened");
        self.modal = Some(modal);
        self.notice = None;
    }

    pub fn handle_open_new_request(&mut self) {
        self.open_modal(Modal::NewRequest(RequestForm::default()));
    }

    pub fn handle_open_new_question(&mut self) {
        self.open_modal(Modal::NewQuestion(QuestionForm::default()));
    }

    /// Open the add-resource form (Admin only)
    pub fn handle_open_add_resource(&mut self) {
        if !self.session.role().can_manage_resources() {
            self.notice = Some(Notice::error("Only Admin can add resources."));
            return;
        }
        self.open_modal(Modal::AddResource(ResourceForm::default()));
    }

    /// Open the edit form prefilled from the resource
    pub fn handle_open_edit_resource(&mut self, id: &str) {
        let Some((_, resource)) = self.session.document().content.find(id) else {
            self.notice = Some(Notice::error("Resource not found"));
            return;
        };
        if !self.session.role().can_manage_resources() {
            self.notice = Some(Notice::error("Only Admin can edit resources."));
            return;
        }
        let form = EditResourceForm::from_resource(resource);
        self.open_modal(Modal::EditResource(form));
    }

    /// Ask for confirmation before deleting a resource
    pub fn handle_open_delete_resource(&mut self, id: &str) {
        let Some((_, resource)) = self.session.document().content.find(id) else {
            self.notice = Some(Notice::error("Resource not found"));
            return;
        };
        if !self.session.role().can_manage_resources() {
            self.notice = Some(Notice::error("Only Admin can delete resources."));
            return;
        }
        let confirm = Confirm::DeleteResource {
            id: resource.id.clone(),
            title: resource.title.clone(),
        };
        self.open_modal(Modal::Confirm(confirm));
    }

    /// Open the answer form, prefilled with any existing answer
    pub fn handle_open_answer_question(&mut self, id: &str) {
        let Some(question) = self.session.document().legal_question(id) else {
            self.notice = Some(Notice::error("Legal question not found"));
            return;
        };
        if !self.session.role().can_answer_questions() {
            self.notice = Some(Notice::error(
                "Only a Legal Advisor or Admin can answer questions.",
            ));
            return;
        }
        let form = AnswerForm {
            question_id: question.id.clone(),
            question: question.question.clone(),
            answer: question.answer.clone(),
        };
        self.open_modal(Modal::AnswerQuestion(form));
    }

    pub fn handle_open_reset(&mut self) {
        self.open_modal(Modal::Confirm(Confirm::Reset));
    }

    pub fn handle_open_clear(&mut self) {
        self.open_modal(Modal::Confirm(Confirm::Clear));
    }

    // ==================== Field Edits ====================

    pub fn handle_form_name_changed(&mut self, value: String) {
        match &mut self.modal {
            Some(Modal::NewRequest(form)) => form.name = value,
            Some(Modal::NewQuestion(form)) => form.name = value,
            _ => {}
        }
    }

    pub fn handle_form_message_changed(&mut self, value: String) {
        if let Some(Modal::NewRequest(form)) = &mut self.modal {
            form.message = value;
        }
    }

    pub fn handle_form_question_changed(&mut self, value: String) {
        if let Some(Modal::NewQuestion(form)) = &mut self.modal {
            form.question = value;
        }
    }

    pub fn handle_form_answer_changed(&mut self, value: String) {
        if let Some(Modal::AnswerQuestion(form)) = &mut self.modal {
            form.answer = value;
        }
    }

    pub fn handle_form_kind_changed(&mut self, kind: ResourceKind) {
        if let Some(Modal::AddResource(form)) = &mut self.modal {
            form.kind = kind;
        }
    }

    pub fn handle_form_title_changed(&mut self, value: String) {
        match &mut self.modal {
            Some(Modal::AddResource(form)) => form.title = value,
            Some(Modal::EditResource(form)) => form.title = value,
            _ => {}
        }
    }

    pub fn handle_form_gender_changed(&mut self, gender: Gender) {
        match &mut self.modal {
            Some(Modal::AddResource(form)) => form.gender = gender,
            Some(Modal::EditResource(form)) => form.gender = gender,
            _ => {}
        }
    }

    pub fn handle_form_description_changed(&mut self, value: String) {
        match &mut self.modal {
            Some(Modal::AddResource(form)) => form.description = value,
            Some(Modal::EditResource(form)) => form.description = value,
            _ => {}
        }
    }

    pub fn handle_form_url_changed(&mut self, value: String) {
        match &mut self.modal {
            Some(Modal::AddResource(form)) => form.url = value,
            Some(Modal::EditResource(form)) => form.url = value,
            _ => {}
        }
    }

    pub fn handle_form_contact_changed(&mut self, value: String) {
        if let Some(Modal::AddResource(form)) = &mut self.modal {
            form.contact = value;
        }
    }

    // ==================== Dismissal ====================

    /// Close the modal without submitting; its input is discarded
    pub fn handle_dismiss_modal(&mut self, reason: DismissReason) {
        if let Some(modal) = self.modal.take() {
            tracing::debug!(modal = modal.title(), ?reason, "modal dismissed");
        }
    }
}
