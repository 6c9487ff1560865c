//! One open tab: the live document, the selectors, and cross-tab sync
//!
//! A [`Session`] owns the only writable copy of the document for its tab. All
//! changes go through the mutation methods (see `mutations.rs`), each of which
//! persists the whole document before it becomes visible in memory. Every
//! visible change bumps [`Session::revision`], which is the signal to
//! re-render.

mod mutations;

pub use mutations::{NewResource, ResourceEdit};

use haven_common::{DOCUMENT_KEY, Document, GENDER_KEY, Gender, ROLE_KEY, Role};

use crate::error::StoreError;
use crate::store::Store;
use crate::sync::ChangeListener;

/// State of a single tab
pub struct Session {
    store: Store,
    listener: Box<dyn ChangeListener>,
    doc: Document,
    role: Role,
    gender: Gender,
    revision: u64,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("store", &self.store)
            .field("role", &self.role)
            .field("gender", &self.gender)
            .field("revision", &self.revision)
            .finish()
    }
}

impl Session {
    /// Open a tab: load the document and both selectors from the store
    pub fn open(store: Store) -> Self {
        // Subscribe first so nothing written between load and subscribe is missed
        let listener = store.subscribe();
        let doc = store.load();
        let role = store.load_role();
        let gender = store.load_gender();
        tracing::debug!(origin = %store.origin(), %role, %gender, "session opened");

        Self {
            store,
            listener,
            doc,
            role,
            gender,
            revision: 0,
        }
    }

    /// The live document
    pub fn document(&self) -> &Document {
        &self.doc
    }

    /// Currently selected role
    pub fn role(&self) -> Role {
        self.role
    }

    /// Currently selected gender filter
    pub fn gender(&self) -> Gender {
        self.gender
    }

    /// Incremented on every visible change
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// The store this tab writes through
    pub fn store(&self) -> &Store {
        &self.store
    }

    // ==================== Selectors ====================

    /// Select a role and persist it under its own key
    pub fn set_role(&mut self, role: Role) -> Result<(), StoreError> {
        self.store.save_role(role)?;
        self.role = role;
        self.touch();
        Ok(())
    }

    /// Select a gender filter and persist it under its own key
    pub fn set_gender(&mut self, gender: Gender) -> Result<(), StoreError> {
        self.store.save_gender(gender)?;
        self.gender = gender;
        self.touch();
        Ok(())
    }

    // ==================== Cross-tab Sync ====================

    /// Apply changes published by other tabs
    ///
    /// A document change reloads the whole document; a selector change re-reads
    /// just that value. Changes published by this tab are ignored. Returns
    /// whether anything was reloaded.
    pub fn sync(&mut self) -> bool {
        let origin = self.store.origin();
        let mut reload_doc = false;
        let mut reload_role = false;
        let mut reload_gender = false;

        for event in self.listener.drain() {
            if event.origin == Some(origin) {
                continue;
            }
            match event.key.as_str() {
                DOCUMENT_KEY => reload_doc = true,
                ROLE_KEY => reload_role = true,
                GENDER_KEY => reload_gender = true,
                _ => {}
            }
        }

        if reload_doc {
            self.doc = self.store.load();
        }
        if reload_role {
            self.role = self.store.load_role();
        }
        if reload_gender {
            self.gender = self.store.load_gender();
        }

        let changed = reload_doc || reload_role || reload_gender;
        if changed {
            tracing::debug!(reload_doc, reload_role, reload_gender, "synced from other tab");
            self.touch();
        }
        changed
    }

    // ==================== Internal ====================

    /// Persist `next` and make it the live document
    ///
    /// The live document is only replaced once the save succeeded.
    fn commit(&mut self, next: Document) -> Result<(), StoreError> {
        self.store.save(&next)?;
        self.doc = next;
        self.touch();
        Ok(())
    }

    fn touch(&mut self) {
        self.revision += 1;
    }
}
