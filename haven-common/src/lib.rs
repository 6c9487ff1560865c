//! Haven Common Library
//!
//! Shared data model, filtering rules, seed data, and input validators for
//! the Haven support-resource tracker.

pub mod document;
pub mod filter;
pub mod gender;
pub mod id;
pub mod role;
pub mod seed;
pub mod validators;

pub use document::{
    Content, Document, HelpRequest, LegalQuestion, RequestStatus, Resource, ResourceKind, User,
};
pub use gender::Gender;
pub use role::Role;

/// Storage key holding the serialized [`Document`]
pub const DOCUMENT_KEY: &str = "dv-db";

/// Storage key holding the selected [`Role`]
pub const ROLE_KEY: &str = "dv-role";

/// Storage key holding the selected [`Gender`] filter
pub const GENDER_KEY: &str = "dv-gender";

/// Every storage key the application writes.
///
/// Used when a listener falls behind and has to assume everything changed.
pub const ALL_KEYS: &[&str] = &[DOCUMENT_KEY, ROLE_KEY, GENDER_KEY];
