//! Ports - Core Traits
//!
//! Abstract interfaces for the two external services the models talk to.
//! Implementations can use HTTP, browser storage, in-memory, etc.
//!
//! Everything runs on a single-threaded executor, so futures need not be `Send`.

use std::cell::RefCell;
use std::collections::HashMap;

use async_trait::async_trait;

use crate::domain::{FetchError, PersistenceError, RecipeData, RecipeSummary};

/// Remote recipe data source
#[async_trait(?Send)]
pub trait RecipeSource {
    /// Recipes matching a free-text query, in the source's order
    async fn search(&self, query: &str) -> Result<Vec<RecipeSummary>, FetchError>;

    /// Full recipe by id
    async fn fetch(&self, id: &str) -> Result<RecipeData, FetchError>;
}

/// Durable key-value persistence
#[async_trait(?Send)]
pub trait KeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, PersistenceError>;

    async fn set(&self, key: &str, value: Vec<u8>) -> Result<(), PersistenceError>;
}

/// Store that lives only as long as the value; used natively and in tests
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, Vec<u8>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: Vec<u8>) -> Self {
        let store = Self::new();
        store.entries.borrow_mut().insert(key.to_string(), value);
        store
    }

    /// Raw bytes currently stored under `key`
    pub fn raw(&self, key: &str) -> Option<Vec<u8>> {
        self.entries.borrow().get(key).cloned()
    }
}

#[async_trait(?Send)]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, PersistenceError> {
        Ok(self.raw(key))
    }

    async fn set(&self, key: &str, value: Vec<u8>) -> Result<(), PersistenceError> {
        self.entries.borrow_mut().insert(key.to_string(), value);
        Ok(())
    }
}
