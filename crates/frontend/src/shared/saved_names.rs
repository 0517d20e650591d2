use super::storage::BrowserStorage;
use contracts::shared::saved_names::{SavedNamesStore, SubscriptionId};
use leptos::prelude::*;

/// App-wide handle to the saved names store.
///
/// `names` mirrors the persisted list and is updated by the store's own
/// notifier, so every mutation path (this tab or another) ends up there.
#[derive(Clone, Copy)]
pub struct SavedNamesContext {
    names: RwSignal<Vec<String>>,
    store: StoredValue<SavedNamesStore<BrowserStorage>, LocalStorage>,
}

impl SavedNamesContext {
    pub fn new() -> Self {
        let store = SavedNamesStore::new(BrowserStorage);
        let names = RwSignal::new(store.load());
        store.subscribe(move |list: &[String]| names.set(list.to_vec()));
        Self {
            names,
            store: StoredValue::new_local(store),
        }
    }

    pub fn names(&self) -> ReadSignal<Vec<String>> {
        self.names.read_only()
    }

    /// Returns `true` when the name was not saved before.
    pub fn save(&self, name: &str) -> bool {
        self.store.with_value(|s| s.save(name))
    }

    pub fn remove(&self, name: &str) -> bool {
        self.store.with_value(|s| s.remove(name))
    }

    pub fn clear(&self) {
        self.store.with_value(|s| s.clear())
    }

    pub fn reload(&self) -> Vec<String> {
        self.store.with_value(|s| s.load())
    }

    pub fn subscribe(&self, handler: impl Fn(&[String]) + 'static) -> SubscriptionId {
        self.store.with_value(|s| s.subscribe(handler))
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        // the store may already be gone when the whole app unmounts
        let _ = self.store.try_with_value(|s| s.unsubscribe(id));
    }

    pub fn handle_external_change(&self, key: Option<&str>) {
        let handled = self.store.with_value(|s| s.handle_external_change(key));
        if handled {
            log::debug!("saved names changed in another tab");
        }
    }
}

impl Default for SavedNamesContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_saved_names() -> SavedNamesContext {
    use_context::<SavedNamesContext>().expect("SavedNamesContext not found in context")
}
