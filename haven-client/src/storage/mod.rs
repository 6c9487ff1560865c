//! Key/value storage backends
//!
//! A [`Storage`] is the equivalent of same-origin local storage: string keys,
//! string values, whole-value replacement. Every tab of the application shares
//! one backend.

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

/// Errors from a storage backend
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Reading or writing the underlying file failed
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Another thread panicked while holding the storage lock
    #[error("storage lock poisoned")]
    Poisoned,
}

/// String key/value store shared by every tab
pub trait Storage: Send + Sync {
    /// Read a value, or None if the key has never been written (or was removed)
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the value stored under `key`
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`; removing a missing key is not an error
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}
