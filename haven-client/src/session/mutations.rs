//! Mutation operations on the live document
//!
//! Each operation checks the caller's role, validates its input, applies the
//! change to a copy of the document, and commits that copy (persist, then
//! swap in). On any error the live document is unchanged.

use chrono::Utc;

use haven_common::id::{
    HELP_REQUEST_PREFIX, LEGAL_QUESTION_PREFIX, RESOURCE_PREFIX, generate_id,
};
use haven_common::seed::default_document;
use haven_common::validators::{
    validate_answer, validate_description, validate_message, validate_name, validate_title,
    validate_url,
};
use haven_common::{
    Gender, HelpRequest, LegalQuestion, RequestStatus, Resource, ResourceKind,
};

use super::Session;
use crate::error::{ActionError, Entity, ValidationError};

/// Fields for a new resource
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewResource {
    pub title: String,
    pub gender: Gender,
    pub description: String,
    pub url: String,
    pub contact: String,
}

/// Replacement fields for an existing resource
///
/// The contact line is not part of the edit form and is kept as is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceEdit {
    pub title: String,
    pub gender: Gender,
    pub description: String,
    pub url: String,
}

impl Session {
    // ==================== Requests & Questions ====================

    /// Submit a help request (any role)
    ///
    /// Returns the new request's id.
    pub fn add_help_request(&mut self, from_name: &str, message: &str) -> Result<String, ActionError> {
        let from_name = from_name.trim();
        let message = message.trim();
        validate_name(from_name).map_err(ValidationError::Name)?;
        validate_message(message).map_err(ValidationError::Message)?;

        let mut next = self.doc.clone();
        let id = unique_id(HELP_REQUEST_PREFIX, |id| {
            next.help_requests.iter().any(|r| r.id == id)
        });
        next.help_requests.push(HelpRequest {
            id: id.clone(),
            from_name: from_name.to_string(),
            message: message.to_string(),
            created_at: Utc::now(),
            status: RequestStatus::New,
            notes: Vec::new(),
        });
        self.commit(next)?;

        tracing::debug!(%id, "help request added");
        Ok(id)
    }

    /// Ask a legal question (any role)
    ///
    /// Returns the new question's id.
    pub fn add_legal_question(&mut self, from_name: &str, question: &str) -> Result<String, ActionError> {
        let from_name = from_name.trim();
        let question = question.trim();
        validate_name(from_name).map_err(ValidationError::Name)?;
        validate_message(question).map_err(ValidationError::Message)?;

        let mut next = self.doc.clone();
        let id = unique_id(LEGAL_QUESTION_PREFIX, |id| {
            next.legal_questions.iter().any(|q| q.id == id)
        });
        next.legal_questions.push(LegalQuestion {
            id: id.clone(),
            from_name: from_name.to_string(),
            question: question.to_string(),
            created_at: Utc::now(),
            answer: String::new(),
        });
        self.commit(next)?;

        tracing::debug!(%id, "legal question added");
        Ok(id)
    }

    /// Move a help request to a new status (Admin, Counsellor)
    pub fn update_request_status(&mut self, id: &str, status: RequestStatus) -> Result<(), ActionError> {
        if !self.role.can_update_request_status() {
            return Err(ActionError::PermissionDenied {
                action: "update request status",
                role: self.role,
            });
        }

        let mut next = self.doc.clone();
        let request = next
            .help_request_mut(id)
            .ok_or_else(|| ActionError::not_found(Entity::HelpRequest, id))?;
        request.status = status;
        self.commit(next)?;

        tracing::debug!(%id, %status, "request status updated");
        Ok(())
    }

    /// Answer (or re-answer) a legal question (Legal Advisor, Admin)
    ///
    /// An empty answer marks the question unanswered again.
    pub fn answer_legal_question(&mut self, id: &str, answer: &str) -> Result<(), ActionError> {
        if !self.role.can_answer_questions() {
            return Err(ActionError::PermissionDenied {
                action: "answer legal questions",
                role: self.role,
            });
        }
        let answer = answer.trim();
        validate_answer(answer).map_err(ValidationError::Answer)?;

        let mut next = self.doc.clone();
        let question = next
            .legal_question_mut(id)
            .ok_or_else(|| ActionError::not_found(Entity::LegalQuestion, id))?;
        question.answer = answer.to_string();
        self.commit(next)?;

        tracing::debug!(%id, "legal question answered");
        Ok(())
    }

    // ==================== Resources ====================

    /// Add a resource to one of the three lists (Admin)
    ///
    /// Returns the new resource's id.
    pub fn add_resource(&mut self, kind: ResourceKind, fields: NewResource) -> Result<String, ActionError> {
        self.require_resource_manager("add resources")?;

        let title = fields.title.trim();
        let description = fields.description.trim();
        let url = fields.url.trim();
        let contact = fields.contact.trim();
        validate_title(title).map_err(ValidationError::Title)?;
        validate_description(description).map_err(ValidationError::Description)?;
        validate_url(url).map_err(ValidationError::Url)?;

        let mut next = self.doc.clone();
        let id = unique_id(RESOURCE_PREFIX, |id| next.content.find(id).is_some());
        next.content.list_mut(kind).push(Resource {
            id: id.clone(),
            gender: fields.gender,
            title: title.to_string(),
            description: description.to_string(),
            url: non_empty(url),
            contact: non_empty(contact),
        });
        self.commit(next)?;

        tracing::debug!(%id, kind = kind.as_str(), "resource added");
        Ok(id)
    }

    /// Replace a resource's title, gender, description and link (Admin)
    pub fn edit_resource(&mut self, id: &str, edit: ResourceEdit) -> Result<(), ActionError> {
        self.require_resource_manager("edit resources")?;

        let title = edit.title.trim();
        let description = edit.description.trim();
        let url = edit.url.trim();
        validate_title(title).map_err(ValidationError::Title)?;
        validate_description(description).map_err(ValidationError::Description)?;
        validate_url(url).map_err(ValidationError::Url)?;

        let mut next = self.doc.clone();
        let resource = next
            .content
            .find_mut(id)
            .ok_or_else(|| ActionError::not_found(Entity::Resource, id))?;
        resource.title = title.to_string();
        resource.gender = edit.gender;
        resource.description = description.to_string();
        resource.url = non_empty(url);
        self.commit(next)?;

        tracing::debug!(%id, "resource edited");
        Ok(())
    }

    /// Delete a resource from whichever list holds it (Admin)
    ///
    /// Deleting an unknown id is a no-op: nothing is persisted and `Ok(None)`
    /// is returned.
    pub fn delete_resource(&mut self, id: &str) -> Result<Option<Resource>, ActionError> {
        self.require_resource_manager("delete resources")?;

        let mut next = self.doc.clone();
        let Some((kind, removed)) = next.content.remove(id) else {
            return Ok(None);
        };
        self.commit(next)?;

        tracing::debug!(%id, kind = kind.as_str(), "resource deleted");
        Ok(Some(removed))
    }

    // ==================== Reset & Clear ====================

    /// Replace everything with the default sample data and persist it
    pub fn reset_to_default(&mut self) -> Result<(), ActionError> {
        self.commit(default_document())?;
        tracing::info!("document reset to default sample data");
        Ok(())
    }

    /// Delete the stored document and show the defaults
    ///
    /// The defaults are not written back; storage stays empty until the next
    /// mutation.
    pub fn clear_all(&mut self) -> Result<(), ActionError> {
        self.store.clear()?;
        self.doc = default_document();
        self.touch();
        tracing::info!("stored document cleared");
        Ok(())
    }

    fn require_resource_manager(&self, action: &'static str) -> Result<(), ActionError> {
        if self.role.can_manage_resources() {
            Ok(())
        } else {
            Err(ActionError::PermissionDenied {
                action,
                role: self.role,
            })
        }
    }
}

/// Generate an id with `prefix` that `exists` does not already claim
fn unique_id(prefix: &str, exists: impl Fn(&str) -> bool) -> String {
    loop {
        let id = generate_id(prefix);
        if !exists(&id) {
            return id;
        }
    }
}

fn non_empty(s: &str) -> Option<String> {
    (!s.is_empty()).then(|| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStorage, Storage, StorageError};
    use crate::store::Store;
    use crate::sync::LocalBus;
    use haven_common::Role;
    use haven_common::validators::{NameError, TitleError};
    use std::sync::Arc;

    fn session() -> Session {
        Session::open(Store::new(
            Arc::new(MemoryStorage::new()),
            Arc::new(LocalBus::new()),
        ))
    }

    fn session_as(role: Role) -> Session {
        let mut session = session();
        session.set_role(role).expect("role");
        session
    }

    /// Storage whose writes always fail
    struct ReadOnlyStorage;

    impl Storage for ReadOnlyStorage {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Ok(None)
        }
        fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Io(std::io::Error::other("read-only")))
        }
        fn remove(&self, _key: &str) -> Result<(), StorageError> {
            Err(StorageError::Io(std::io::Error::other("read-only")))
        }
    }

    fn resource_fields(title: &str) -> NewResource {
        NewResource {
            title: title.to_string(),
            gender: Gender::Female,
            description: "desc".to_string(),
            url: String::new(),
            contact: String::new(),
        }
    }

    // ==================== Help Requests ====================

    #[test]
    fn test_add_help_request() {
        let mut s = session();
        let before = Utc::now();
        let id = s.add_help_request("Jane", "need shelter").expect("add");

        let r = &s.document().help_requests[0];
        assert_eq!(r.id, id);
        assert!(id.starts_with("req-"));
        assert_eq!(r.from_name, "Jane");
        assert_eq!(r.message, "need shelter");
        assert_eq!(r.status, RequestStatus::New);
        assert!(r.notes.is_empty());
        assert!(r.created_at >= before);
    }

    #[test]
    fn test_new_request_listed_first() {
        use crate::views::{ViewContext, requests};

        let mut s = session();
        s.add_help_request("Ana", "first").expect("add");
        s.add_help_request("Ben", "second").expect("add");
        let newest = s.add_help_request("Cam", "third").expect("add");

        let view = requests::render(s.document(), &ViewContext::default());
        assert_eq!(view.cards.len(), 3);
        assert_eq!(view.cards[0].id, newest);
    }

    #[test]
    fn test_add_help_request_persists() {
        let mut s = session();
        s.add_help_request("Jane", "need shelter").expect("add");
        assert_eq!(s.store().load(), *s.document());
    }

    #[test]
    fn test_add_help_request_trims_input() {
        let mut s = session();
        s.add_help_request("  Jane ", "\n need shelter \n").expect("add");
        let r = &s.document().help_requests[0];
        assert_eq!(r.from_name, "Jane");
        assert_eq!(r.message, "need shelter");
    }

    #[test]
    fn test_add_help_request_requires_fields() {
        let mut s = session();
        let err = s.add_help_request("   ", "need shelter").expect_err("empty name");
        assert!(matches!(
            err,
            ActionError::Invalid(ValidationError::Name(NameError::Empty))
        ));
        assert!(s.add_help_request("Jane", "").is_err());
        assert!(s.document().help_requests.is_empty());
        assert_eq!(s.revision(), 0);
    }

    #[test]
    fn test_update_request_status_requires_role() {
        let mut s = session();
        let id = s.add_help_request("Jane", "need shelter").expect("add");
        for role in [Role::VictimSurvivor, Role::LegalAdvisor] {
            s.set_role(role).expect("role");
            let err = s
                .update_request_status(&id, RequestStatus::Resolved)
                .expect_err("denied");
            assert!(matches!(err, ActionError::PermissionDenied { .. }));
        }
        assert_eq!(s.document().help_requests[0].status, RequestStatus::New);
    }

    #[test]
    fn test_update_request_status() {
        let mut s = session_as(Role::Counsellor);
        let id = s.add_help_request("Jane", "need shelter").expect("add");
        s.update_request_status(&id, RequestStatus::InProgress)
            .expect("in progress");
        assert_eq!(s.document().help_requests[0].status, RequestStatus::InProgress);
        assert_eq!(
            s.store().load().help_requests[0].status,
            RequestStatus::InProgress
        );
    }

    #[test]
    fn test_update_request_status_unknown_id() {
        let mut s = session_as(Role::Admin);
        let err = s
            .update_request_status("req-missing", RequestStatus::Resolved)
            .expect_err("not found");
        assert!(matches!(
            err,
            ActionError::NotFound {
                entity: Entity::HelpRequest,
                ..
            }
        ));
    }

    // ==================== Legal Questions ====================

    #[test]
    fn test_ask_then_answer() {
        let mut s = session();
        let first = s.add_legal_question("Sam", "Protection orders?").expect("ask");
        let second = s.add_legal_question("Kim", "Custody?").expect("ask");
        assert!(first.starts_with("q-"));
        assert_eq!(s.document().legal_question(&first).expect("q").answer, "");

        s.set_role(Role::LegalAdvisor).expect("role");
        s.answer_legal_question(&first, " Apply at your local court. ")
            .expect("answer");

        let answered = s.document().legal_question(&first).expect("q");
        assert_eq!(answered.answer, "Apply at your local court.");
        assert!(answered.is_answered());
        assert!(!s.document().legal_question(&second).expect("q").is_answered());
    }

    #[test]
    fn test_answer_requires_role() {
        let mut s = session();
        let id = s.add_legal_question("Sam", "Protection orders?").expect("ask");
        s.set_role(Role::Counsellor).expect("role");
        assert!(matches!(
            s.answer_legal_question(&id, "yes"),
            Err(ActionError::PermissionDenied { .. })
        ));
    }

    #[test]
    fn test_answer_unknown_question() {
        let mut s = session_as(Role::Admin);
        assert!(matches!(
            s.answer_legal_question("q-missing", "yes"),
            Err(ActionError::NotFound {
                entity: Entity::LegalQuestion,
                ..
            })
        ));
    }

    // ==================== Resources ====================

    #[test]
    fn test_add_resource_requires_admin() {
        let mut s = session_as(Role::Counsellor);
        assert!(matches!(
            s.add_resource(ResourceKind::Legal, resource_fields("T")),
            Err(ActionError::PermissionDenied { .. })
        ));
        assert_eq!(s.document().content.total(), 7);
    }

    #[test]
    fn test_add_resource() {
        let mut s = session_as(Role::Admin);
        let mut fields = resource_fields("Shelter list");
        fields.url = " https://example.org ".to_string();
        let id = s.add_resource(ResourceKind::SupportService, fields).expect("add");

        let (kind, r) = s.document().content.find(&id).expect("resource");
        assert_eq!(kind, ResourceKind::SupportService);
        assert_eq!(r.title, "Shelter list");
        assert_eq!(r.gender, Gender::Female);
        assert_eq!(r.url.as_deref(), Some("https://example.org"));
        assert_eq!(r.contact, None);
        assert_eq!(s.document().content.support_services.len(), 2);
    }

    #[test]
    fn test_add_resource_requires_title() {
        let mut s = session_as(Role::Admin);
        let err = s
            .add_resource(ResourceKind::Legal, resource_fields(" "))
            .expect_err("title");
        assert!(matches!(
            err,
            ActionError::Invalid(ValidationError::Title(TitleError::Empty))
        ));
    }

    #[test]
    fn test_edit_resource() {
        let mut s = session_as(Role::Admin);
        s.edit_resource(
            "ss-1",
            ResourceEdit {
                title: "Hotline".to_string(),
                gender: Gender::Male,
                description: "Call any time.".to_string(),
                url: String::new(),
            },
        )
        .expect("edit");

        let (_, r) = s.document().content.find("ss-1").expect("resource");
        assert_eq!(r.title, "Hotline");
        assert_eq!(r.gender, Gender::Male);
        assert_eq!(r.description, "Call any time.");
        assert_eq!(r.url, None);
        assert_eq!(r.contact.as_deref(), Some("1-800-799-7233"));
    }

    #[test]
    fn test_edit_unknown_resource() {
        let mut s = session_as(Role::Admin);
        let err = s
            .edit_resource(
                "nope",
                ResourceEdit {
                    title: "T".to_string(),
                    ..Default::default()
                },
            )
            .expect_err("not found");
        assert_eq!(err.to_string(), "Resource not found");
    }

    #[test]
    fn test_delete_resource_from_one_list() {
        let mut s = session_as(Role::Admin);
        let before = s.document().clone();
        let removed = s.delete_resource("hr-2").expect("delete").expect("removed");
        assert_eq!(removed.id, "hr-2");

        let doc = s.document();
        assert_eq!(doc.content.health_risks.len(), 2);
        assert_eq!(doc.content.legal_resources, before.content.legal_resources);
        assert_eq!(doc.content.support_services, before.content.support_services);
        assert_eq!(doc.users, before.users);
        assert_eq!(s.store().load(), *doc);
    }

    #[test]
    fn test_delete_unknown_resource_is_noop() {
        let mut s = session_as(Role::Admin);
        let revision = s.revision();
        assert!(s.delete_resource("missing").expect("delete").is_none());
        assert_eq!(s.revision(), revision);
        assert_eq!(s.document(), &default_document());
    }

    #[test]
    fn test_delete_requires_admin() {
        let mut s = session();
        assert!(s.delete_resource("lr-1").is_err());
        assert_eq!(s.document().content.total(), 7);
    }

    // ==================== Reset & Clear ====================

    #[test]
    fn test_reset_to_default_persists() {
        let mut s = session();
        s.add_help_request("Jane", "need shelter").expect("add");
        s.reset_to_default().expect("reset");
        assert_eq!(s.document(), &default_document());
        assert!(s.store().load().help_requests.is_empty());
    }

    #[test]
    fn test_clear_all_removes_stored_copy() {
        let storage = MemoryStorage::new();
        let mut s = Session::open(Store::new(
            Arc::new(storage.clone()),
            Arc::new(LocalBus::new()),
        ));
        s.add_help_request("Jane", "need shelter").expect("add");
        s.clear_all().expect("clear");

        assert_eq!(s.document(), &default_document());
        assert_eq!(
            storage.get(haven_common::DOCUMENT_KEY).expect("get"),
            None
        );
    }

    // ==================== Failure Atomicity ====================

    #[test]
    fn test_failed_save_leaves_document_unchanged() {
        let mut s = Session::open(Store::new(
            Arc::new(ReadOnlyStorage),
            Arc::new(LocalBus::new()),
        ));
        let err = s.add_help_request("Jane", "need shelter").expect_err("save fails");
        assert!(matches!(err, ActionError::Store(_)));
        assert!(s.document().help_requests.is_empty());
        assert_eq!(s.revision(), 0);
    }
}
