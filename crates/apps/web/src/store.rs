use storage::{InMemoryStore, KeyValueStore, LocalStorageStore, StorageError};
use tracing::warn;

/// `localStorage` when the browser allows it, otherwise a per-session map.
#[derive(Debug)]
pub enum BrowserStore {
    Local(LocalStorageStore),
    Memory(InMemoryStore),
}

impl BrowserStore {
    pub fn new() -> Self {
        match LocalStorageStore::new() {
            Ok(s) => BrowserStore::Local(s),
            Err(err) => {
                warn!(%err, "localStorage unavailable, state will not survive reloads");
                BrowserStore::Memory(InMemoryStore::new())
            }
        }
    }
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match self {
            BrowserStore::Local(s) => s.get(key),
            BrowserStore::Memory(s) => s.get(key),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        match self {
            BrowserStore::Local(s) => s.set(key, value),
            BrowserStore::Memory(s) => s.set(key, value),
        }
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        match self {
            BrowserStore::Local(s) => s.remove(key),
            BrowserStore::Memory(s) => s.remove(key),
        }
    }
}
