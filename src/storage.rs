//! Browser Storage
//!
//! `localStorage` behind the core's key-value store port.

use async_trait::async_trait;
use recipe_core::domain::PersistenceError;
use recipe_core::KeyValueStore;
use web_sys::Storage;

/// Values are stored as UTF-8 text, which is all `localStorage` holds
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn local_storage() -> Result<Storage, PersistenceError> {
        let window = web_sys::window().ok_or_else(|| PersistenceError::Unavailable("no window".to_string()))?;
        window
            .local_storage()
            .map_err(|e| PersistenceError::Unavailable(format!("{:?}", e)))?
            .ok_or_else(|| PersistenceError::Unavailable("localStorage is disabled".to_string()))
    }
}

#[async_trait(?Send)]
impl KeyValueStore for BrowserStorage {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, PersistenceError> {
        let storage = Self::local_storage()?;
        let value = storage
            .get_item(key)
            .map_err(|e| PersistenceError::Unavailable(format!("{:?}", e)))?;
        Ok(value.map(String::into_bytes))
    }

    async fn set(&self, key: &str, value: Vec<u8>) -> Result<(), PersistenceError> {
        let text = String::from_utf8(value).map_err(|e| PersistenceError::Serialize {
            key: key.to_string(),
            reason: e.to_string(),
        })?;
        let storage = Self::local_storage()?;
        storage
            .set_item(key, &text)
            .map_err(|e| PersistenceError::Unavailable(format!("{:?}", e)))
    }
}
