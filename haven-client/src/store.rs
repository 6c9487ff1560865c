//! Persistent store for the document and the selector values
//!
//! The read path never fails: a missing, unreadable, or corrupt document is
//! replaced by a fresh copy of the default data. Writes replace the whole
//! stored value and then notify the other tabs.

use std::sync::Arc;

use haven_common::seed::default_document;
use haven_common::{DOCUMENT_KEY, Document, GENDER_KEY, Gender, ROLE_KEY, Role};

use crate::error::StoreError;
use crate::storage::Storage;
use crate::sync::{ChangeListener, ChangeNotifier, StorageEvent, TabId};

/// One tab's handle on the shared storage
#[derive(Clone)]
pub struct Store {
    storage: Arc<dyn Storage>,
    notifier: Arc<dyn ChangeNotifier>,
    origin: TabId,
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store").field("origin", &self.origin).finish()
    }
}

impl Store {
    /// Create a store for a new tab
    pub fn new(storage: Arc<dyn Storage>, notifier: Arc<dyn ChangeNotifier>) -> Self {
        Self {
            storage,
            notifier,
            origin: TabId::new(),
        }
    }

    /// Id stamped on every change this store publishes
    pub fn origin(&self) -> TabId {
        self.origin
    }

    /// Listen for changes published by any tab
    pub fn subscribe(&self) -> Box<dyn ChangeListener> {
        self.notifier.subscribe()
    }

    // ==================== Document ====================

    /// Read the stored document, falling back to the default data
    pub fn load(&self) -> Document {
        let raw = match self.storage.get(DOCUMENT_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                tracing::debug!("no stored document, using defaults");
                return default_document();
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to read document, using defaults");
                return default_document();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(doc) => doc,
            Err(e) => {
                tracing::warn!(error = %e, "stored document is unreadable, using defaults");
                default_document()
            }
        }
    }

    /// Replace the stored document
    pub fn save(&self, doc: &Document) -> Result<(), StoreError> {
        let json = serde_json::to_string(doc)?;
        self.storage.set(DOCUMENT_KEY, &json)?;
        tracing::debug!(bytes = json.len(), "document saved");
        self.publish(DOCUMENT_KEY);
        Ok(())
    }

    /// Remove the stored document
    ///
    /// In-memory copies are not touched; the next `load` returns defaults.
    pub fn clear(&self) -> Result<(), StoreError> {
        self.storage.remove(DOCUMENT_KEY)?;
        self.publish(DOCUMENT_KEY);
        Ok(())
    }

    // ==================== Selectors ====================

    /// Read the selected role, defaulting to Victim/Survivor
    pub fn load_role(&self) -> Role {
        self.read_value(ROLE_KEY)
            .and_then(|s| Role::parse(&s))
            .unwrap_or_default()
    }

    /// Persist the selected role
    pub fn save_role(&self, role: Role) -> Result<(), StoreError> {
        self.storage.set(ROLE_KEY, role.as_str())?;
        self.publish(ROLE_KEY);
        Ok(())
    }

    /// Read the gender filter, defaulting to All
    pub fn load_gender(&self) -> Gender {
        self.read_value(GENDER_KEY)
            .and_then(|s| Gender::parse(&s))
            .unwrap_or_default()
    }

    /// Persist the gender filter
    pub fn save_gender(&self, gender: Gender) -> Result<(), StoreError> {
        self.storage.set(GENDER_KEY, gender.as_str())?;
        self.publish(GENDER_KEY);
        Ok(())
    }

    fn read_value(&self, key: &str) -> Option<String> {
        match self.storage.get(key) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(key, error = %e, "failed to read stored value");
                None
            }
        }
    }

    fn publish(&self, key: &str) {
        self.notifier.publish(StorageEvent::new(key, self.origin));
    }
}
