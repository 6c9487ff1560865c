//! Application-wide constants
//!
//! Shared constants used across multiple modules.

/// Application directory name (used in config and data directory paths)
pub const APP_DIR_NAME: &str = "haven";

/// Config file name
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Directory (under the data directory) holding one file per storage key
pub const STORAGE_DIR_NAME: &str = "storage";

/// File extension for storage key files
pub const STORAGE_FILE_EXT: &str = "json";

/// Number of change events a listener may fall behind before it must reload everything
pub const CHANGE_BUS_CAPACITY: usize = 64;

/// Maximum number of guidance items on the dashboard
pub const GUIDANCE_LIMIT: usize = 5;

/// Maximum number of resource cards in the dashboard's "latest" strip
pub const LATEST_RESOURCES_LIMIT: usize = 6;
