//! Change notifications between tabs
//!
//! Whenever a tab writes to storage it publishes a [`StorageEvent`]. Every
//! other tab drains its [`ChangeListener`] on its next event-loop turn and
//! reloads whatever changed. Delivery is push-based and eventual; there is no
//! locking, so the last writer wins.
//!
//! [`LocalBus`] backs the notifier with an in-process broadcast channel. Any
//! other transport (a socket, a shared-memory ring) can implement
//! [`ChangeNotifier`] without touching the store, the session, or the views.

use tokio::sync::broadcast;
use tokio::sync::broadcast::error::TryRecvError;
use uuid::Uuid;

use haven_common::ALL_KEYS;

use crate::constants::CHANGE_BUS_CAPACITY;

/// Identity of one tab (one [`Session`](crate::session::Session))
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TabId(Uuid);

impl TabId {
    /// Random id for a new tab
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TabId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TabId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A storage key was written or removed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageEvent {
    /// Storage key that changed
    pub key: String,
    /// Tab that made the change, or None when the origin is unknown
    pub origin: Option<TabId>,
}

impl StorageEvent {
    pub fn new(key: &str, origin: TabId) -> Self {
        Self {
            key: key.to_string(),
            origin: Some(origin),
        }
    }
}

/// Publishes storage changes and hands out listeners
pub trait ChangeNotifier: Send + Sync {
    /// Announce a change to every listener
    fn publish(&self, event: StorageEvent);

    /// Start listening; only events published after this call are seen
    fn subscribe(&self) -> Box<dyn ChangeListener>;
}

/// Receives storage changes for one tab
pub trait ChangeListener: Send {
    /// Take every pending event without blocking
    fn drain(&mut self) -> Vec<StorageEvent>;
}

// =============================================================================
// In-process bus
// =============================================================================

/// In-process notifier over a `tokio` broadcast channel
///
/// Clones publish to the same channel.
#[derive(Debug, Clone)]
pub struct LocalBus {
    tx: broadcast::Sender<StorageEvent>,
}

impl LocalBus {
    pub fn new() -> Self {
        Self::with_capacity(CHANGE_BUS_CAPACITY)
    }

    /// Bus that buffers at most `capacity` unread events per listener
    pub fn with_capacity(capacity: usize) -> Self {
        let (tx, _rx) = broadcast::channel(capacity);
        Self { tx }
    }
}

impl Default for LocalBus {
    fn default() -> Self {
        Self::new()
    }
}

impl ChangeNotifier for LocalBus {
    fn publish(&self, event: StorageEvent) {
        // No listeners is fine: nobody else has the store open.
        let _ = self.tx.send(event);
    }

    fn subscribe(&self) -> Box<dyn ChangeListener> {
        Box::new(LocalListener {
            rx: self.tx.subscribe(),
        })
    }
}

struct LocalListener {
    rx: broadcast::Receiver<StorageEvent>,
}

impl ChangeListener for LocalListener {
    fn drain(&mut self) -> Vec<StorageEvent> {
        let mut events = Vec::new();
        loop {
            match self.rx.try_recv() {
                Ok(event) => events.push(event),
                Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => break,
                Err(TryRecvError::Lagged(skipped)) => {
                    // Dropped events are unknown, so report every key as changed.
                    tracing::warn!(skipped, "change listener lagged, reloading everything");
                    events.extend(ALL_KEYS.iter().map(|key| StorageEvent {
                        key: key.to_string(),
                        origin: None,
                    }));
                }
            }
        }
        events
    }
}
