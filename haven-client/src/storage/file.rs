//! File-backed storage
//!
//! Each key is stored as `{key}.json` in a single directory, by default
//! `~/.local/share/haven/storage/` (platform equivalent elsewhere).
//! Each write goes to its own temporary file in the same directory, which is
//! then renamed over the key file. Readers never see a half-written document,
//! even with several processes writing at once.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use super::{Storage, StorageError};
use crate::constants::{APP_DIR_NAME, STORAGE_DIR_NAME, STORAGE_FILE_EXT};

/// Unix file permissions for storage files (owner read/write only)
#[cfg(unix)]
const FILE_PERMISSIONS: u32 = 0o600;

/// Unix directory permissions for the storage directory
#[cfg(unix)]
const DIR_PERMISSIONS: u32 = 0o700;

/// Storage backed by one file per key
#[derive(Debug, Clone)]
pub struct FileStorage {
    base_dir: PathBuf,
}

impl FileStorage {
    /// Use `base_dir` as the storage directory (created on first write)
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Platform default storage directory
    ///
    /// Returns None if the data directory cannot be determined.
    pub fn default_dir() -> Option<PathBuf> {
        dirs::data_dir().map(|dir| dir.join(APP_DIR_NAME).join(STORAGE_DIR_NAME))
    }

    /// Directory holding the key files
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Path of the file for `key`
    ///
    /// Keys are restricted to ASCII letters, digits, `-` and `_` so they can
    /// never escape the storage directory.
    fn key_path(&self, key: &str) -> Result<PathBuf, StorageError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(StorageError::Io(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("invalid storage key: {:?}", key),
            )));
        }
        Ok(self
            .base_dir
            .join(format!("{}.{}", key, STORAGE_FILE_EXT)))
    }

    fn ensure_dir(&self) -> Result<(), StorageError> {
        fs::create_dir_all(&self.base_dir)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&self.base_dir, fs::Permissions::from_mode(DIR_PERMISSIONS))?;
        }

        Ok(())
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.key_path(key)?;
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.key_path(key)?;
        self.ensure_dir()?;

        // Owner-only before any content lands
        let mut tmp = tempfile::NamedTempFile::new_in(&self.base_dir)?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(tmp.path(), fs::Permissions::from_mode(FILE_PERMISSIONS))?;
        }

        tmp.write_all(value.as_bytes())?;
        tmp.flush()?;
        tmp.persist(&path).map_err(|e| e.error)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let path = self.key_path(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
