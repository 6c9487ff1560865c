//! Client configuration
//!
//! Stored as `config.json` in the platform config directory
//! (`~/.config/haven/` on Linux). A missing or unreadable file yields the
//! defaults; command-line flags override whatever was loaded.

use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{APP_DIR_NAME, CONFIG_FILE_NAME};

/// File permissions for the config file on Unix (owner read/write only)
#[cfg(unix)]
const CONFIG_FILE_MODE: u32 = 0o600;

/// Default tracing filter when neither `--debug` nor `RUST_LOG` is given
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Errors saving the configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not determine the config directory")]
    NoConfigDir,
    #[error("failed to write config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Persistent client settings
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Config {
    /// Storage directory override; None uses the platform data directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_dir: Option<PathBuf>,

    /// Tracing filter directive (e.g. "warn", "haven_client=debug")
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_dir: None,
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl Config {
    /// Platform-specific config file path
    ///
    /// Returns None if the config directory cannot be determined.
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load the config file, or the defaults if there is none
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Load from `path`, falling back to the defaults on any failure
    pub fn load_from(path: &Path) -> Self {
        if path.exists()
            && let Ok(contents) = fs::read_to_string(path)
            && let Ok(config) = serde_json::from_str::<Config>(&contents)
        {
            return config;
        }
        Self::default()
    }

    /// Record `dir` as the storage directory, returning whether it changed
    pub fn remember_storage_dir(&mut self, dir: &Path) -> bool {
        if self.storage_dir.as_deref() == Some(dir) {
            return false;
        }
        self.storage_dir = Some(dir.to_path_buf());
        true
    }

    /// Save to the platform config file
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::config_path().ok_or(ConfigError::NoConfigDir)?;
        self.save_to(&path)
    }

    /// Save to `path` with owner-only permissions, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(path, fs::Permissions::from_mode(CONFIG_FILE_MODE))?;
        }

        Ok(())
    }
}
