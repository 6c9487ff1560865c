//! Gender tags on resources and the gender filter

use serde::{Deserialize, Serialize};
use strum::AsRefStr;

/// Gender a resource is written for, also used as the active filter
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, AsRefStr, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Gender {
    /// Applies to everyone
    #[default]
    All,
    Female,
    Male,
    /// Non-binary and LGBTQ+
    Nonbinary,
}

impl Gender {
    /// All genders in selector order
    pub const ALL: [Gender; 4] = [Gender::All, Gender::Female, Gender::Male, Gender::Nonbinary];

    /// Persisted id (e.g. "nonbinary")
    pub fn as_str(&self) -> &str {
        self.as_ref()
    }

    /// Parse the persisted id
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "all" => Some(Gender::All),
            "female" => Some(Gender::Female),
            "male" => Some(Gender::Male),
            "nonbinary" => Some(Gender::Nonbinary),
            _ => None,
        }
    }

    /// Human-readable label for selectors and headlines
    pub fn label(&self) -> &'static str {
        match self {
            Gender::All => "All",
            Gender::Female => "Female",
            Gender::Male => "Male",
            Gender::Nonbinary => "Non-binary / LGBTQ+",
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
