//! Modal submission and card action handlers
//!
//! A refused submit keeps the modal open with its input and reports the
//! reason in the notice; a successful one closes the modal and confirms.

use haven_common::RequestStatus;

use crate::app::HavenApp;
use crate::error::ActionError;
use crate::types::{Confirm, Modal, Notice};

/// Confirmation after a help request is submitted
const REQUEST_SUBMITTED: &str = "Request submitted — a counsellor will respond.";

/// Confirmation after a legal question is sent
const QUESTION_SENT: &str = "Question sent — a legal advisor will reply.";

impl HavenApp {
    /// Run the open modal's operation
    pub fn handle_submit_modal(&mut self) {
        let Some(modal) = self.modal.clone() else {
            return;
        };

        match self.submit(&modal) {
            Ok(confirmation) => {
                self.modal = None;
                self.notice = confirmation.map(Notice::info);
            }
            Err(e) => {
                tracing::debug!(modal = modal.title(), error = %e, "submit refused");
                self.notice = Some(Notice::error(e.to_string()));
            }
        }
    }

    /// Returns the confirmation to show, if any
    fn submit(&mut self, modal: &Modal) -> Result<Option<String>, ActionError> {
        let session = &mut self.session;
        match modal {
            Modal::NewRequest(form) => {
                session.add_help_request(&form.name, &form.message)?;
                Ok(Some(REQUEST_SUBMITTED.to_string()))
            }
            Modal::NewQuestion(form) => {
                session.add_legal_question(&form.name, &form.question)?;
                Ok(Some(QUESTION_SENT.to_string()))
            }
            Modal::AnswerQuestion(form) => {
                session.answer_legal_question(&form.question_id, &form.answer)?;
                Ok(Some("Answer saved.".to_string()))
            }
            Modal::AddResource(form) => {
                session.add_resource(form.kind, form.to_new_resource())?;
                Ok(Some(format!("Added to {}.", form.kind.label())))
            }
            Modal::EditResource(form) => {
                session.edit_resource(&form.id, form.to_edit())?;
                Ok(Some("Resource updated.".to_string()))
            }
            Modal::Confirm(Confirm::DeleteResource { id, .. }) => {
                // Already gone (another tab deleted it): nothing to confirm
                let removed = session.delete_resource(id)?;
                Ok(removed.map(|r| format!("Deleted \"{}\".", r.title)))
            }
            Modal::Confirm(Confirm::Reset) => {
                session.reset_to_default()?;
                Ok(Some("Sample data restored.".to_string()))
            }
            Modal::Confirm(Confirm::Clear) => {
                session.clear_all()?;
                Ok(Some("Local data cleared.".to_string()))
            }
        }
    }

    // ==================== Card Actions ====================

    /// Move a help request to a new status
    pub fn handle_set_request_status(&mut self, id: &str, status: RequestStatus) {
        self.notice = match self.session.update_request_status(id, status) {
            Ok(()) => Some(Notice::info(format!("Request marked {}.", status))),
            Err(e) => Some(Notice::error(e.to_string())),
        };
    }
}

#[cfg(test)]
mod tests {
    use crate::handlers::testing::{app, app_as};
    use crate::types::{Message, Modal, Notice};
    use haven_common::seed::default_document;
    use haven_common::{Gender, RequestStatus, ResourceKind, Role};

    fn submit_request(app: &mut crate::app::HavenApp, name: &str, message: &str) {
        app.update(Message::OpenNewRequest);
        app.update(Message::FormNameChanged(name.to_string()));
        app.update(Message::FormMessageChanged(message.to_string()));
        app.update(Message::SubmitModal);
    }

    #[test]
    fn test_submit_request_confirms_and_closes() {
        let mut app = app();
        submit_request(&mut app, "Jane", "need shelter");
        assert!(app.modal().is_none());
        assert_eq!(
            app.notice(),
            Some(&Notice::Info(
                "Request submitted — a counsellor will respond.".to_string()
            ))
        );
        assert_eq!(app.view().requests.cards.len(), 1);
    }

    #[test]
    fn test_invalid_submit_keeps_modal_and_input() {
        let mut app = app();
        submit_request(&mut app, "Jane", "   ");
        assert_eq!(
            app.modal(),
            Some(&Modal::NewRequest(crate::types::RequestForm {
                name: "Jane".to_string(),
                message: "   ".to_string(),
            }))
        );
        assert!(app.notice().is_some_and(|n| n.is_error()));
        assert!(app.session().document().help_requests.is_empty());
    }

    #[test]
    fn test_fix_and_resubmit() {
        let mut app = app();
        submit_request(&mut app, "", "need shelter");
        assert!(app.modal().is_some());
        app.update(Message::FormNameChanged("Jane".to_string()));
        app.update(Message::SubmitModal);
        assert!(app.modal().is_none());
        assert_eq!(app.session().document().help_requests.len(), 1);
    }

    #[test]
    fn test_ask_question() {
        let mut app = app();
        app.update(Message::OpenNewQuestion);
        app.update(Message::FormNameChanged("Sam".to_string()));
        app.update(Message::FormQuestionChanged("Protection orders?".to_string()));
        app.update(Message::SubmitModal);
        assert_eq!(
            app.notice().map(|n| n.text()),
            Some("Question sent — a legal advisor will reply.")
        );
        assert_eq!(app.view().legal.cards[0].answer, None);
    }

    #[test]
    fn test_answer_question() {
        let mut app = app();
        app.update(Message::OpenNewQuestion);
        app.update(Message::FormNameChanged("Sam".to_string()));
        app.update(Message::FormQuestionChanged("Protection orders?".to_string()));
        app.update(Message::SubmitModal);
        let id = app.session().document().legal_questions[0].id.clone();

        app.update(Message::RoleSelected(Role::LegalAdvisor));
        app.update(Message::OpenAnswerQuestion(id.clone()));
        app.update(Message::FormAnswerChanged("Apply at the court.".to_string()));
        app.update(Message::SubmitModal);

        assert!(app.modal().is_none());
        assert_eq!(
            app.view().legal.cards[0].answer.as_deref(),
            Some("Apply at the court.")
        );
    }

    #[test]
    fn test_add_resource() {
        let mut app = app_as(Role::Admin);
        app.update(Message::OpenAddResource);
        app.update(Message::FormKindChanged(ResourceKind::SupportService));
        app.update(Message::FormTitleChanged("Local shelter".to_string()));
        app.update(Message::FormGenderChanged(Gender::Female));
        app.update(Message::FormContactChanged("555-0100".to_string()));
        app.update(Message::SubmitModal);

        assert!(app.modal().is_none());
        let support = &app.session().document().content.support_services;
        assert_eq!(support.len(), 2);
        assert_eq!(support[1].title, "Local shelter");
        assert_eq!(support[1].contact.as_deref(), Some("555-0100"));
        assert_eq!(app.view().dashboard.stats.resources, 8);
    }

    #[test]
    fn test_add_resource_without_title_stays_open() {
        let mut app = app_as(Role::Admin);
        app.update(Message::OpenAddResource);
        app.update(Message::FormDescriptionChanged("desc".to_string()));
        app.update(Message::SubmitModal);
        assert!(matches!(app.modal(), Some(Modal::AddResource(_))));
        assert_eq!(app.notice().map(|n| n.text()), Some("title is required"));
    }

    #[test]
    fn test_edit_resource() {
        let mut app = app_as(Role::Admin);
        app.update(Message::OpenEditResource("hr-3".to_string()));
        app.update(Message::FormDescriptionChanged("Updated.".to_string()));
        app.update(Message::SubmitModal);
        let (_, r) = app.session().document().content.find("hr-3").expect("hr-3");
        assert_eq!(r.description, "Updated.");
        assert_eq!(r.title, "Non-binary Safety & Health");
    }

    #[test]
    fn test_delete_after_confirm() {
        let mut app = app_as(Role::Admin);
        app.update(Message::OpenDeleteResource("lr-2".to_string()));
        assert!(app.session().document().content.find("lr-2").is_some());
        app.update(Message::SubmitModal);
        assert!(app.session().document().content.find("lr-2").is_none());
        assert_eq!(app.session().document().content.total(), 6);
    }

    #[test]
    fn test_role_dropped_while_modal_open() {
        let mut app = app_as(Role::Admin);
        app.update(Message::OpenDeleteResource("lr-2".to_string()));
        app.update(Message::RoleSelected(Role::Counsellor));
        app.update(Message::SubmitModal);
        assert!(app.modal().is_some());
        assert!(app.notice().is_some_and(|n| n.is_error()));
        assert!(app.session().document().content.find("lr-2").is_some());
    }

    #[test]
    fn test_reset_and_clear() {
        let mut app = app();
        submit_request(&mut app, "Jane", "need shelter");

        app.update(Message::OpenReset);
        app.update(Message::SubmitModal);
        assert_eq!(app.session().document(), &default_document());

        submit_request(&mut app, "Jane", "need shelter");
        app.update(Message::OpenClear);
        app.update(Message::SubmitModal);
        assert_eq!(app.session().document(), &default_document());
        assert_eq!(app.notice().map(|n| n.text()), Some("Local data cleared."));
    }

    #[test]
    fn test_status_actions() {
        let mut app = app();
        submit_request(&mut app, "Jane", "need shelter");
        let id = app.session().document().help_requests[0].id.clone();

        app.update(Message::SetRequestStatus {
            id: id.clone(),
            status: RequestStatus::InProgress,
        });
        assert!(app.notice().is_some_and(|n| n.is_error()));
        assert_eq!(app.view().requests.cards[0].status, RequestStatus::New);

        app.update(Message::RoleSelected(Role::Counsellor));
        app.update(Message::SetRequestStatus {
            id,
            status: RequestStatus::InProgress,
        });
        assert_eq!(
            app.notice().map(|n| n.text()),
            Some("Request marked in-progress.")
        );
        assert_eq!(app.view().requests.cards[0].status, RequestStatus::InProgress);
    }
}
