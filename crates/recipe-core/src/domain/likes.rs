//! Likes Model
//!
//! Liked recipes in insertion order, at most one entry per recipe id,
//! persisted as a whole under one storage key.

use serde::{Deserialize, Serialize};

use super::error::PersistenceError;
use crate::ports::KeyValueStore;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikedRecipe {
    pub id: String,
    pub title: String,
    pub author: String,
    pub image: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LikesCollection {
    likes: Vec<LikedRecipe>,
}

impl LikesCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Like a recipe. An id that is already liked keeps its existing entry.
    pub fn add_like(
        &mut self,
        id: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        image: impl Into<String>,
    ) -> LikedRecipe {
        let id = id.into();
        if let Some(existing) = self.likes.iter().find(|like| like.id == id) {
            return existing.clone();
        }

        let like = LikedRecipe {
            id,
            title: title.into(),
            author: author.into(),
            image: image.into(),
        };
        self.likes.push(like.clone());
        like
    }

    pub fn delete_like(&mut self, id: &str) {
        self.likes.retain(|like| like.id != id);
    }

    pub fn is_liked(&self, id: &str) -> bool {
        self.likes.iter().any(|like| like.id == id)
    }

    pub fn count(&self) -> usize {
        self.likes.len()
    }

    /// Whether the likes menu has anything to show
    pub fn menu_visible(&self) -> bool {
        !self.likes.is_empty()
    }

    pub fn likes(&self) -> &[LikedRecipe] {
        &self.likes
    }

    /// Serialize the full collection under `key`
    pub async fn persist<K: KeyValueStore + ?Sized>(&self, store: &K, key: &str) -> Result<(), PersistenceError> {
        let bytes = serde_json::to_vec(self).map_err(|e| PersistenceError::Serialize {
            key: key.to_string(),
            reason: e.to_string(),
        })?;
        store.set(key, bytes).await
    }

    /// Load the collection stored under `key`.
    ///
    /// Missing, unreadable or corrupt data yields an empty collection.
    pub async fn restore<K: KeyValueStore + ?Sized>(store: &K, key: &str) -> Self {
        let bytes = match store.get(key).await {
            Ok(Some(bytes)) => bytes,
            Ok(None) => return Self::new(),
            Err(e) => {
                log::warn!("could not read likes: {}", e);
                return Self::new();
            }
        };

        match serde_json::from_slice::<LikesCollection>(&bytes) {
            Ok(mut restored) => {
                restored.dedup();
                log::info!("restored {} liked recipes", restored.count());
                restored
            }
            Err(e) => {
                let err = PersistenceError::Corrupt {
                    key: key.to_string(),
                    reason: e.to_string(),
                };
                log::warn!("{}", err);
                Self::new()
            }
        }
    }

    /// Hand-edited storage may repeat an id; the first entry wins
    fn dedup(&mut self) {
        let mut seen = std::collections::HashSet::new();
        self.likes.retain(|like| seen.insert(like.id.clone()));
    }
}
