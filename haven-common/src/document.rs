//! The application document and the entities it holds
//!
//! A [`Document`] is the unit of persistence: it is always read and written
//! whole. Field names serialize in camelCase to keep the stored JSON layout
//! stable (`fromName`, `createdAt`, `legalResources`, ...).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::AsRefStr;

use crate::gender::Gender;
use crate::role::Role;

// =============================================================================
// Users
// =============================================================================

/// A seeded user account (read-only at runtime)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub role: Role,
}

// =============================================================================
// Resources
// =============================================================================

/// Which of the three resource lists a resource lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Serialize, Deserialize)]
pub enum ResourceKind {
    /// Legal rights and protection information (`legalResources`)
    #[serde(rename = "legalResources")]
    #[strum(serialize = "legalResources")]
    Legal,
    /// Health-risk and safety guidance (`healthRisks`)
    #[serde(rename = "healthRisks")]
    #[strum(serialize = "healthRisks")]
    HealthRisk,
    /// Hotlines and support services (`supportServices`)
    #[serde(rename = "supportServices")]
    #[strum(serialize = "supportServices")]
    SupportService,
}

impl ResourceKind {
    /// All kinds in storage order
    pub const ALL: [ResourceKind; 3] = [
        ResourceKind::Legal,
        ResourceKind::HealthRisk,
        ResourceKind::SupportService,
    ];

    /// Name of the list this kind is stored under
    pub fn as_str(&self) -> &str {
        self.as_ref()
    }

    /// Parse a list name
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "legalResources" => Some(ResourceKind::Legal),
            "healthRisks" => Some(ResourceKind::HealthRisk),
            "supportServices" => Some(ResourceKind::SupportService),
            _ => None,
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            ResourceKind::Legal => "Legal Resource",
            ResourceKind::HealthRisk => "Health Risk / Guidance",
            ResourceKind::SupportService => "Support Service",
        }
    }
}

/// A support resource tagged with the gender it is written for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub id: String,
    #[serde(default)]
    pub gender: Gender,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "non_empty"
    )]
    pub url: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "non_empty"
    )]
    pub contact: Option<String>,
}

/// Deserialize an optional string, treating `""` as absent
fn non_empty<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

/// The three resource lists, kept as separate typed collections
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Content {
    #[serde(default)]
    pub legal_resources: Vec<Resource>,
    #[serde(default)]
    pub health_risks: Vec<Resource>,
    #[serde(default)]
    pub support_services: Vec<Resource>,
}

impl Content {
    /// Resources of one kind, in insertion order
    pub fn list(&self, kind: ResourceKind) -> &[Resource] {
        match kind {
            ResourceKind::Legal => &self.legal_resources,
            ResourceKind::HealthRisk => &self.health_risks,
            ResourceKind::SupportService => &self.support_services,
        }
    }

    /// Mutable access to the list for one kind
    pub fn list_mut(&mut self, kind: ResourceKind) -> &mut Vec<Resource> {
        match kind {
            ResourceKind::Legal => &mut self.legal_resources,
            ResourceKind::HealthRisk => &mut self.health_risks,
            ResourceKind::SupportService => &mut self.support_services,
        }
    }

    /// Every resource with its kind: legal, then health-risk, then support
    pub fn iter(&self) -> impl Iterator<Item = (ResourceKind, &Resource)> {
        ResourceKind::ALL
            .into_iter()
            .flat_map(move |kind| self.list(kind).iter().map(move |r| (kind, r)))
    }

    /// Find a resource in any list
    pub fn find(&self, id: &str) -> Option<(ResourceKind, &Resource)> {
        self.iter().find(|(_, r)| r.id == id)
    }

    /// Find a resource in any list for editing
    pub fn find_mut(&mut self, id: &str) -> Option<&mut Resource> {
        self.legal_resources
            .iter_mut()
            .chain(self.health_risks.iter_mut())
            .chain(self.support_services.iter_mut())
            .find(|r| r.id == id)
    }

    /// Remove a resource from whichever list holds it
    ///
    /// The other lists are left untouched. Returns None (and changes nothing)
    /// when no list holds the id.
    pub fn remove(&mut self, id: &str) -> Option<(ResourceKind, Resource)> {
        for kind in ResourceKind::ALL {
            let list = self.list_mut(kind);
            if let Some(pos) = list.iter().position(|r| r.id == id) {
                return Some((kind, list.remove(pos)));
            }
        }
        None
    }

    /// Number of resources across all three lists
    pub fn total(&self) -> usize {
        self.legal_resources.len() + self.health_risks.len() + self.support_services.len()
    }
}

// =============================================================================
// Help Requests
// =============================================================================

/// Progress of a help request
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, AsRefStr, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum RequestStatus {
    #[default]
    New,
    InProgress,
    Resolved,
}

impl RequestStatus {
    /// All statuses in workflow order
    pub const ALL: [RequestStatus; 3] = [
        RequestStatus::New,
        RequestStatus::InProgress,
        RequestStatus::Resolved,
    ];

    /// Persisted string form (e.g. "in-progress")
    pub fn as_str(&self) -> &str {
        self.as_ref()
    }

    /// Parse the persisted string form
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "new" => Some(RequestStatus::New),
            "in-progress" => Some(RequestStatus::InProgress),
            "resolved" => Some(RequestStatus::Resolved),
            _ => None,
        }
    }
}

impl std::fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A request for help from a survivor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HelpRequest {
    pub id: String,
    pub from_name: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub status: RequestStatus,
    /// Case notes. Stored and round-tripped, not yet written by any operation.
    #[serde(default)]
    pub notes: Vec<String>,
}

// =============================================================================
// Legal Questions
// =============================================================================

/// A question for a legal advisor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegalQuestion {
    pub id: String,
    pub from_name: String,
    pub question: String,
    pub created_at: DateTime<Utc>,
    /// Empty until answered
    #[serde(default)]
    pub answer: String,
}

impl LegalQuestion {
    pub fn is_answered(&self) -> bool {
        !self.answer.is_empty()
    }
}

// =============================================================================
// Document
// =============================================================================

/// Everything the application persists under the document key
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub content: Content,
    #[serde(default)]
    pub help_requests: Vec<HelpRequest>,
    #[serde(default)]
    pub legal_questions: Vec<LegalQuestion>,
}

impl Document {
    /// Look up a help request for mutation
    pub fn help_request_mut(&mut self, id: &str) -> Option<&mut HelpRequest> {
        self.help_requests.iter_mut().find(|r| r.id == id)
    }

    /// Look up a legal question for mutation
    pub fn legal_question_mut(&mut self, id: &str) -> Option<&mut LegalQuestion> {
        self.legal_questions.iter_mut().find(|q| q.id == id)
    }

    /// Look up a legal question
    pub fn legal_question(&self, id: &str) -> Option<&LegalQuestion> {
        self.legal_questions.iter().find(|q| q.id == id)
    }
}
