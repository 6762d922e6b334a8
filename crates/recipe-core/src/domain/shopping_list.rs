//! Shopping List Model
//!
//! Ordered purchasable items. Ids come from a counter that never goes
//! backwards, so a deleted item's id is never handed out again.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::{PersistenceError, ValidationError};
use crate::ports::KeyValueStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(u64);

impl ItemId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingItem {
    pub id: ItemId,
    pub count: f64,
    pub unit: String,
    pub ingredient_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingList {
    items: Vec<ShoppingItem>,
    next_id: u64,
}

impl Default for ShoppingList {
    fn default() -> Self {
        Self::new()
    }
}

impl ShoppingList {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }

    /// Append an item under a fresh id
    pub fn add_item(&mut self, count: f64, unit: impl Into<String>, ingredient_name: impl Into<String>) -> ShoppingItem {
        let item = ShoppingItem {
            id: ItemId(self.next_id),
            count,
            unit: unit.into(),
            ingredient_name: ingredient_name.into(),
        };
        self.next_id += 1;
        self.items.push(item.clone());
        item
    }

    /// Remove an item; unknown ids are ignored
    pub fn delete_item(&mut self, id: ItemId) {
        self.items.retain(|item| item.id != id);
    }

    /// Change an item's count in place
    pub fn update_count(&mut self, id: ItemId, new_count: f64) -> Result<(), ValidationError> {
        if !new_count.is_finite() {
            return Err(ValidationError::InvalidCount(new_count.to_string()));
        }
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(ValidationError::UnknownItem(id))?;
        item.count = new_count;
        Ok(())
    }

    pub fn items(&self) -> &[ShoppingItem] {
        &self.items
    }

    pub fn get(&self, id: ItemId) -> Option<&ShoppingItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Write the whole list, counter included, under `key`
    pub async fn persist<K: KeyValueStore + ?Sized>(&self, store: &K, key: &str) -> Result<(), PersistenceError> {
        let bytes = serde_json::to_vec(self).map_err(|e| PersistenceError::Serialize {
            key: key.to_string(),
            reason: e.to_string(),
        })?;
        store.set(key, bytes).await
    }

    /// Read the list stored under `key`; missing or corrupt data yields an empty list
    pub async fn restore<K: KeyValueStore + ?Sized>(store: &K, key: &str) -> Self {
        match store.get(key).await {
            Ok(Some(bytes)) => Self::from_bytes(key, &bytes).unwrap_or_else(|e| {
                log::warn!("{}", e);
                Self::new()
            }),
            Ok(None) => Self::new(),
            Err(e) => {
                log::warn!("could not read shopping list: {}", e);
                Self::new()
            }
        }
    }

    fn from_bytes(key: &str, bytes: &[u8]) -> Result<Self, PersistenceError> {
        let mut list: ShoppingList = serde_json::from_slice(bytes).map_err(|e| PersistenceError::Corrupt {
            key: key.to_string(),
            reason: e.to_string(),
        })?;
        // never hand out an id that is already taken, and keep room to advance
        let highest = list.items.iter().map(|item| item.id.0).max().unwrap_or(0);
        let next_id = highest
            .checked_add(1)
            .map(|floor| list.next_id.max(floor))
            .filter(|next_id| next_id.checked_add(1).is_some())
            .ok_or_else(|| PersistenceError::Corrupt {
                key: key.to_string(),
                reason: "item id counter exhausted".to_string(),
            })?;
        list.next_id = next_id;
        Ok(list)
    }
}
