//! Selector, navigation and sync handlers

use haven_common::{Gender, Role};

use crate::app::HavenApp;
use crate::types::{Notice, View};

impl HavenApp {
    // ==================== Selectors ====================

    /// Switch role and persist the choice
    pub fn handle_role_selected(&mut self, role: Role) {
        if let Err(e) = self.session.set_role(role) {
            tracing::warn!(error = %e, "failed to save role");
            self.notice = Some(Notice::error(format!("could not save: {}", e)));
            return;
        }
        self.enforce_view_access();
    }

    /// Switch the gender filter and persist the choice
    pub fn handle_gender_selected(&mut self, gender: Gender) {
        if let Err(e) = self.session.set_gender(gender) {
            tracing::warn!(error = %e, "failed to save gender filter");
            self.notice = Some(Notice::error(format!("could not save: {}", e)));
        }
    }

    // ==================== Navigation ====================

    /// Show a view; the Users view is refused for everyone but Admin
    pub fn handle_navigate(&mut self, view: View) {
        if view == View::Users && !self.session.role().can_view_users() {
            self.notice = Some(Notice::error("Only Admin can view users."));
            return;
        }
        self.view = view;
    }

    /// Leave the Users view once the role no longer allows it
    fn enforce_view_access(&mut self) {
        if self.view == View::Users && !self.session.role().can_view_users() {
            self.view = View::Dashboard;
        }
    }

    // ==================== Sync ====================

    /// Pick up changes made by other tabs
    pub fn handle_storage_changed(&mut self) {
        if self.session.sync() {
            self.enforce_view_access();
        }
    }
}
