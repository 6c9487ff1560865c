//! Built-in sample data
//!
//! Used on first start, after "reset to default", and whenever the stored
//! document is missing or unreadable.

use crate::document::{Content, Document, Resource, User};
use crate::gender::Gender;
use crate::role::Role;

fn user(id: &str, name: &str, role: Role) -> User {
    User {
        id: id.to_string(),
        name: name.to_string(),
        role,
    }
}

fn resource(
    id: &str,
    gender: Gender,
    title: &str,
    description: &str,
    url: Option<&str>,
    contact: Option<&str>,
) -> Resource {
    Resource {
        id: id.to_string(),
        gender,
        title: title.to_string(),
        description: description.to_string(),
        url: url.map(str::to_string),
        contact: contact.map(str::to_string),
    }
}

/// Build a fresh copy of the default document
///
/// Every call returns a new owned value, so mutating one copy never affects
/// another.
pub fn default_document() -> Document {
    Document {
        users: vec![
            user("u-admin", "Admin", Role::Admin),
            user("u-c-1", "Case Worker", Role::Counsellor),
            user("u-l-1", "Legal Advisor", Role::LegalAdvisor),
        ],
        content: Content {
            legal_resources: vec![
                resource(
                    "lr-1",
                    Gender::Female,
                    "Women: Legal Rights & Protection Orders",
                    "Overview of protections, orders and seeking counsel.",
                    Some("https://www.thehotline.org/"),
                    None,
                ),
                resource(
                    "lr-2",
                    Gender::Male,
                    "Men: Legal Assistance & Shelter Info",
                    "Legal support tailored for male survivors, including confidentiality.",
                    Some("#"),
                    None,
                ),
                resource(
                    "lr-3",
                    Gender::Nonbinary,
                    "LGBTQ+: Specialized Legal Support",
                    "Resources for non-binary & LGBTQ+ survivors.",
                    Some("#"),
                    None,
                ),
            ],
            health_risks: vec![
                resource(
                    "hr-1",
                    Gender::Female,
                    "Female Safety Planning",
                    "Check-in plan, hiding essentials, trusted contacts.",
                    None,
                    None,
                ),
                resource(
                    "hr-2",
                    Gender::Male,
                    "Male Survivor Safety Guidance",
                    "Male survivors may face stigma — seek confidential services.",
                    None,
                    None,
                ),
                resource(
                    "hr-3",
                    Gender::Nonbinary,
                    "Non-binary Safety & Health",
                    "Inclusive resources and trauma-informed care options.",
                    None,
                    None,
                ),
            ],
            support_services: vec![resource(
                "ss-1",
                Gender::All,
                "National DV Hotline (24/7)",
                "Confidential 24/7 support.",
                Some("tel:18007997233"),
                Some("1-800-799-7233"),
            )],
        },
        help_requests: Vec::new(),
        legal_questions: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_default_counts() {
        let doc = default_document();
        assert_eq!(doc.users.len(), 3);
        assert_eq!(doc.content.legal_resources.len(), 3);
        assert_eq!(doc.content.health_risks.len(), 3);
        assert_eq!(doc.content.support_services.len(), 1);
        assert_eq!(doc.content.total(), 7);
        assert!(doc.help_requests.is_empty());
        assert!(doc.legal_questions.is_empty());
    }

    #[test]
    fn test_default_ids_unique() {
        let doc = default_document();
        let mut seen = HashSet::new();
        for (_, r) in doc.content.iter() {
            assert!(seen.insert(r.id.clone()), "Duplicate resource id: {}", r.id);
        }
        let mut users = HashSet::new();
        for u in &doc.users {
            assert!(users.insert(u.id.clone()), "Duplicate user id: {}", u.id);
        }
    }

    #[test]
    fn test_default_is_not_shared() {
        let mut first = default_document();
        first.content.legal_resources.clear();
        first.users.clear();
        let second = default_document();
        assert_eq!(second.content.legal_resources.len(), 3);
        assert_eq!(second.users.len(), 3);
    }

    #[test]
    fn test_hotline_applies_to_everyone() {
        let doc = default_document();
        let hotline = &doc.content.support_services[0];
        assert_eq!(hotline.gender, Gender::All);
        assert_eq!(hotline.contact.as_deref(), Some("1-800-799-7233"));
    }

    #[test]
    fn test_male_guidance_text() {
        let doc = default_document();
        let guide = doc
            .content
            .health_risks
            .iter()
            .find(|r| r.id == "hr-2")
            .expect("hr-2");
        assert_eq!(guide.gender, Gender::Male);
        assert_eq!(
            guide.description,
            "Male survivors may face stigma — seek confidential services."
        );
    }
}
