//! Saved names: a newest-first list of plain strings kept in browser storage,
//! plus the notifier that keeps every mounted view in sync with it.
//!
//! All mutations re-read storage first (read-modify-write), so two views
//! holding their own copies of the list can never overwrite each other's
//! additions. Listeners are called synchronously, in registration order.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use thiserror::Error;

/// Fixed storage slot. The value is a raw JSON array of strings.
pub const SAVED_NAMES_KEY: &str = "savedNames";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage is not available")]
    Unavailable,

    #[error("storage read failed: {0}")]
    ReadFailed(String),

    #[error("storage write failed: {0}")]
    WriteFailed(String),
}

/// Minimal key/value seam over `window.localStorage`.
pub trait KeyValueStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Handle returned by [`SavedNamesStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Rc<dyn Fn(&[String])>;

pub struct SavedNamesStore<S> {
    storage: S,
    listeners: RefCell<Vec<(SubscriptionId, Listener)>>,
    next_id: Cell<u64>,
}

impl<S: KeyValueStorage> SavedNamesStore<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            listeners: RefCell::new(Vec::new()),
            next_id: Cell::new(1),
        }
    }

    /// Current persisted list. Missing or unreadable data is an empty list.
    pub fn load(&self) -> Vec<String> {
        let raw = match self.storage.get_item(SAVED_NAMES_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                log::warn!("saved names: {}", e);
                return Vec::new();
            }
        };
        serde_json::from_str::<Vec<String>>(&raw).unwrap_or_else(|e| {
            log::warn!("saved names: stored value is not a string array: {}", e);
            Vec::new()
        })
    }

    /// Prepend `name` unless it is already saved. Returns `true` when the list
    /// changed; a duplicate causes neither a write nor a notification.
    pub fn save(&self, name: &str) -> bool {
        if name.trim().is_empty() {
            return false;
        }
        let mut names = self.load();
        if names.iter().any(|n| n == name) {
            return false;
        }
        names.insert(0, name.to_string());
        self.persist(&names);
        self.announce(&names);
        true
    }

    /// Drop every exact match of `name`. Notifies only when something was removed.
    pub fn remove(&self, name: &str) -> bool {
        let mut names = self.load();
        let before = names.len();
        names.retain(|n| n != name);
        if names.len() == before {
            return false;
        }
        self.persist(&names);
        self.announce(&names);
        true
    }

    pub fn clear(&self) {
        self.persist(&[]);
        self.announce(&[]);
    }

    /// Register a listener. It receives the full list after every change.
    pub fn subscribe<F>(&self, handler: F) -> SubscriptionId
    where
        F: Fn(&[String]) + 'static,
    {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.listeners.borrow_mut().push((id, Rc::new(handler)));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(lid, _)| *lid != id);
        listeners.len() != before
    }

    /// Deliver `names` to every listener. Runs on a snapshot of the registry,
    /// so listeners may subscribe or unsubscribe while being called.
    pub fn announce(&self, names: &[String]) {
        let snapshot: Vec<Listener> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, l)| Rc::clone(l))
            .collect();
        for listener in snapshot {
            listener(names);
        }
    }

    /// Another tab changed storage. `None` means the whole storage was
    /// cleared. Reloads and notifies only for the saved names slot.
    pub fn handle_external_change(&self, key: Option<&str>) -> bool {
        match key {
            Some(k) if k != SAVED_NAMES_KEY => false,
            _ => {
                let names = self.load();
                self.announce(&names);
                true
            }
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    fn persist(&self, names: &[String]) {
        let raw = match serde_json::to_string(names) {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!("saved names: serialize failed: {}", e);
                return;
            }
        };
        if let Err(e) = self.storage.set_item(SAVED_NAMES_KEY, &raw) {
            log::warn!("saved names: {}", e);
        }
    }
}
