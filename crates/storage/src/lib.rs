use std::collections::BTreeMap;

pub mod snapshot;
pub mod theme;

pub use snapshot::*;
pub use theme::*;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("browser storage unavailable")]
    StorageUnavailable,
    #[error("storage error: {0}")]
    Io(String),
    #[error("could not encode value: {0}")]
    Encode(String),
}

/// Durable string key-value storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

#[derive(Debug, Default, Clone)]
pub struct InMemoryStore {
    items: BTreeMap<String, String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.items.remove(key);
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
mod wasm_storage {
    use super::{KeyValueStore, StorageError};

    /// `window.localStorage`.
    #[derive(Debug, Default, Clone, Copy)]
    pub struct LocalStorageStore;

    impl LocalStorageStore {
        pub fn new() -> Result<Self, StorageError> {
            // Probe once so callers learn about disabled storage up front.
            window_local_storage()?;
            Ok(Self)
        }
    }

    impl KeyValueStore for LocalStorageStore {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            window_local_storage()?
                .get_item(key)
                .map_err(|e| StorageError::Io(format!("get_item({key}) failed: {:?}", e)))
        }

        fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
            window_local_storage()?
                .set_item(key, value)
                .map_err(|e| StorageError::Io(format!("set_item({key}) failed: {:?}", e)))
        }

        fn remove(&mut self, key: &str) -> Result<(), StorageError> {
            window_local_storage()?
                .remove_item(key)
                .map_err(|e| StorageError::Io(format!("remove_item({key}) failed: {:?}", e)))
        }
    }

    fn window_local_storage() -> Result<web_sys::Storage, StorageError> {
        let win = web_sys::window().ok_or(StorageError::StorageUnavailable)?;
        win.local_storage()
            .map_err(|e: wasm_bindgen::JsValue| {
                StorageError::Io(format!("localStorage error: {:?}", e))
            })?
            .ok_or(StorageError::StorageUnavailable)
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm_storage::LocalStorageStore;

#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorageStore;

#[cfg(not(target_arch = "wasm32"))]
impl LocalStorageStore {
    pub fn new() -> Result<Self, StorageError> {
        Err(StorageError::StorageUnavailable)
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl KeyValueStore for LocalStorageStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::StorageUnavailable)
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::StorageUnavailable)
    }

    fn remove(&mut self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::StorageUnavailable)
    }
}
