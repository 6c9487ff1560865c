//! Message handlers organized by category

mod forms;
mod navigation;
mod submit;

/// Shared test fixture: an app on fresh in-memory storage
#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Arc;

    use crate::app::HavenApp;
    use crate::session::Session;
    use crate::storage::MemoryStorage;
    use crate::store::Store;
    use crate::sync::LocalBus;
    use crate::types::Message;
    use haven_common::Role;

    pub(crate) fn app() -> HavenApp {
        HavenApp::new(Session::open(Store::new(
            Arc::new(MemoryStorage::new()),
            Arc::new(LocalBus::new()),
        )))
    }

    pub(crate) fn app_as(role: Role) -> HavenApp {
        let mut app = app();
        app.update(Message::RoleSelected(role));
        app
    }
}
