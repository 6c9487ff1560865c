//! Entity id generation

use uuid::Uuid;

/// Number of random characters after the prefix
pub const ID_SUFFIX_LENGTH: usize = 7;

/// Prefix for help request ids
pub const HELP_REQUEST_PREFIX: &str = "req";

/// Prefix for legal question ids
pub const LEGAL_QUESTION_PREFIX: &str = "q";

/// Prefix for resource ids created at runtime
pub const RESOURCE_PREFIX: &str = "r";

/// Generate an id like `req-3f9a0c1`
///
/// The suffix is taken from a random v4 UUID, so it is lowercase hex.
pub fn generate_id(prefix: &str) -> String {
    let uuid = Uuid::new_v4().simple().to_string();
    format!("{}-{}", prefix, &uuid[..ID_SUFFIX_LENGTH])
}
