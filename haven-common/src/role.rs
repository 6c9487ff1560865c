//! User roles and the actions each role may trigger

use serde::{Deserialize, Serialize};
use strum::AsRefStr;

/// Role of the person using the application
///
/// The string forms are the values persisted under the role key and inside
/// the document's user list, so they must not change.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, AsRefStr, Serialize, Deserialize,
)]
pub enum Role {
    /// Full access, including resource management and the user list
    #[strum(serialize = "Admin")]
    #[serde(rename = "Admin")]
    Admin,
    /// Handles help requests
    #[strum(serialize = "Counsellor")]
    #[serde(rename = "Counsellor")]
    Counsellor,
    /// Answers legal questions
    #[strum(serialize = "Legal Advisor")]
    #[serde(rename = "Legal Advisor")]
    LegalAdvisor,
    /// Browses resources and submits requests and questions
    #[default]
    #[strum(serialize = "Victim/Survivor")]
    #[serde(rename = "Victim/Survivor")]
    VictimSurvivor,
}

impl Role {
    /// All roles in selector order
    pub const ALL: [Role; 4] = [
        Role::VictimSurvivor,
        Role::Counsellor,
        Role::LegalAdvisor,
        Role::Admin,
    ];

    /// Persisted string form (e.g. "Legal Advisor")
    pub fn as_str(&self) -> &str {
        self.as_ref()
    }

    /// Parse the persisted string form
    ///
    /// Returns None for anything outside the closed set.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Admin" => Some(Role::Admin),
            "Counsellor" => Some(Role::Counsellor),
            "Legal Advisor" => Some(Role::LegalAdvisor),
            "Victim/Survivor" => Some(Role::VictimSurvivor),
            _ => None,
        }
    }

    /// Whether this role may move a help request between statuses
    pub fn can_update_request_status(&self) -> bool {
        matches!(self, Role::Admin | Role::Counsellor)
    }

    /// Whether this role may answer legal questions
    pub fn can_answer_questions(&self) -> bool {
        matches!(self, Role::Admin | Role::LegalAdvisor)
    }

    /// Whether this role may add, edit, or delete resources
    pub fn can_manage_resources(&self) -> bool {
        matches!(self, Role::Admin)
    }

    /// Whether this role may open the user list
    pub fn can_view_users(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
