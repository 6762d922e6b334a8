//! Core configuration
//!
//! Where recipes come from, how results are paged and which storage keys
//! hold persisted state.

use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE_URL: &str = "https://forkify-api.herokuapp.com/api";
pub const DEFAULT_RESULTS_PER_PAGE: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoreConfig {
    /// Base URL of the remote recipe API, without trailing slash
    pub api_base_url: String,
    pub results_per_page: usize,
    pub likes_key: String,
    pub shopping_list_key: String,
    /// Keep the shopping list across reloads like likes are
    pub persist_shopping_list: bool,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            results_per_page: DEFAULT_RESULTS_PER_PAGE,
            likes_key: "likes".to_string(),
            shopping_list_key: "shopping_list".to_string(),
            persist_shopping_list: true,
        }
    }
}

impl CoreConfig {
    /// Parse a JSON config; absent fields take their defaults
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let config: CoreConfig = serde_json::from_str(raw)?;
        Ok(config.normalized())
    }

    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self.normalized()
    }

    fn normalized(mut self) -> Self {
        self.results_per_page = self.results_per_page.max(1);
        let trimmed = self.api_base_url.trim_end_matches('/').len();
        self.api_base_url.truncate(trimmed);
        self
    }
}
