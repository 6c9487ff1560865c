//! Command-line argument parsing

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use haven_common::{Gender, RequestStatus, ResourceKind, Role};

/// Get default storage directory help text for current platform
fn default_storage_help() -> String {
    #[cfg(target_os = "linux")]
    return "Storage directory (default: ~/.local/share/haven/storage/)".to_string();

    #[cfg(target_os = "macos")]
    return "Storage directory (default: ~/Library/Application Support/haven/storage/)"
        .to_string();

    #[cfg(target_os = "windows")]
    return "Storage directory (default: %APPDATA%\\haven\\storage\\)".to_string();

    #[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
    return "Storage directory (overrides platform default)".to_string();
}

/// Haven support-resource tracker
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Storage directory (overrides config and platform default)
    #[arg(long, help = default_storage_help())]
    pub storage_dir: Option<PathBuf>,

    /// Remember --storage-dir in the config file for later runs
    #[arg(long, requires = "storage_dir")]
    pub save_config: bool,

    /// Enable debug logging
    #[arg(long, default_value = "false")]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show guidance, latest resources and totals
    Dashboard,
    /// List resources visible under the gender filter
    Resources {
        /// Filter by title or description
        #[arg(long)]
        search: Option<String>,
    },
    /// List help requests, newest first
    Requests {
        /// Filter by name or message
        #[arg(long)]
        search: Option<String>,
        /// Only show requests with this status (new, in-progress, resolved)
        #[arg(long, value_parser = parse_status)]
        status: Option<RequestStatus>,
    },
    /// List legal questions, newest first
    Legal {
        /// Filter by name, question or answer
        #[arg(long)]
        search: Option<String>,
    },
    /// List users (Admin only)
    Users,
    /// Select a role (admin, counsellor, legal-advisor, victim-survivor)
    Role {
        #[arg(value_parser = parse_role)]
        role: Role,
    },
    /// Select the gender filter (all, female, male, nonbinary)
    Gender {
        #[arg(value_parser = parse_gender)]
        gender: Gender,
    },
    /// Submit a help request
    Request {
        #[arg(long)]
        name: String,
        #[arg(long)]
        message: String,
    },
    /// Move a help request to a new status (Admin, Counsellor)
    Status {
        id: String,
        #[arg(value_parser = parse_status)]
        status: RequestStatus,
    },
    /// Ask a legal question
    Ask {
        #[arg(long)]
        name: String,
        #[arg(long)]
        question: String,
    },
    /// Answer a legal question (Legal Advisor, Admin)
    Answer {
        id: String,
        /// Answer text; empty marks the question unanswered
        #[arg(long)]
        text: String,
    },
    /// Add a resource (Admin)
    AddResource {
        /// Target list (legal, health, support)
        #[arg(long, value_parser = parse_kind)]
        kind: ResourceKind,
        #[arg(long)]
        title: String,
        #[arg(long, value_parser = parse_gender, default_value = "all")]
        gender: Gender,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long, default_value = "")]
        url: String,
        #[arg(long, default_value = "")]
        contact: String,
    },
    /// Edit a resource; omitted fields keep their current values (Admin)
    EditResource {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long, value_parser = parse_gender)]
        gender: Option<Gender>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        url: Option<String>,
    },
    /// Delete a resource (Admin)
    DeleteResource {
        id: String,
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },
    /// Replace all data with the sample data
    Reset {
        /// Confirm the reset
        #[arg(long)]
        yes: bool,
    },
    /// Delete all stored data
    Clear {
        /// Confirm clearing
        #[arg(long)]
        yes: bool,
    },
}

// =============================================================================
// Value Parsers
// =============================================================================

fn parse_role(s: &str) -> Result<Role, String> {
    if let Some(role) = Role::parse(s) {
        return Ok(role);
    }
    match s.to_ascii_lowercase().as_str() {
        "admin" => Ok(Role::Admin),
        "counsellor" => Ok(Role::Counsellor),
        "legal-advisor" | "legal" => Ok(Role::LegalAdvisor),
        "victim-survivor" | "victim" | "survivor" => Ok(Role::VictimSurvivor),
        _ => Err(format!(
            "unknown role '{}' (expected admin, counsellor, legal-advisor, victim-survivor)",
            s
        )),
    }
}

fn parse_gender(s: &str) -> Result<Gender, String> {
    Gender::parse(&s.to_ascii_lowercase()).ok_or_else(|| {
        format!(
            "unknown gender '{}' (expected all, female, male, nonbinary)",
            s
        )
    })
}

fn parse_status(s: &str) -> Result<RequestStatus, String> {
    RequestStatus::parse(&s.to_ascii_lowercase()).ok_or_else(|| {
        format!(
            "unknown status '{}' (expected new, in-progress, resolved)",
            s
        )
    })
}

fn parse_kind(s: &str) -> Result<ResourceKind, String> {
    if let Some(kind) = ResourceKind::parse(s) {
        return Ok(kind);
    }
    match s.to_ascii_lowercase().as_str() {
        "legal" => Ok(ResourceKind::Legal),
        "health" | "health-risk" => Ok(ResourceKind::HealthRisk),
        "support" | "support-service" => Ok(ResourceKind::SupportService),
        _ => Err(format!(
            "unknown resource kind '{}' (expected legal, health, support)",
            s
        )),
    }
}
