//! HTTP client for the Forkify recipe API
//!
//! `GET {base}/search?q=...` and `GET {base}/get?rId=...`.
//! Uses the browser's fetch on wasm and rustls natively.

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::domain::{FetchError, RecipeData, RecipeSummary};
use crate::ports::RecipeSource;

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    recipes: Vec<ApiSummary>,
}

#[derive(Debug, Deserialize)]
struct ApiSummary {
    recipe_id: String,
    title: String,
    #[serde(default)]
    publisher: String,
    #[serde(default)]
    image_url: String,
}

#[derive(Debug, Deserialize)]
struct RecipeResponse {
    recipe: ApiRecipe,
}

#[derive(Debug, Deserialize)]
struct ApiRecipe {
    recipe_id: String,
    title: String,
    #[serde(default)]
    publisher: String,
    #[serde(default)]
    image_url: String,
    #[serde(default)]
    source_url: String,
    #[serde(default)]
    ingredients: Vec<String>,
}

impl From<ApiSummary> for RecipeSummary {
    fn from(api: ApiSummary) -> Self {
        Self {
            id: api.recipe_id,
            title: api.title,
            author: api.publisher,
            thumbnail_url: api.image_url,
        }
    }
}

impl From<ApiRecipe> for RecipeData {
    fn from(api: ApiRecipe) -> Self {
        Self {
            id: api.recipe_id,
            title: api.title,
            author: api.publisher.clone(),
            image: api.image_url,
            source_url: api.source_url,
            publisher: api.publisher,
            ingredients: api.ingredients,
        }
    }
}

/// Forkify API client
#[derive(Debug, Clone)]
pub struct ForkifyClient {
    client: Client,
    base_url: String,
}

impl ForkifyClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> Result<T, FetchError> {
        let url = format!("{}/{}", self.base_url, path);
        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            log::error!("GET {} failed with status {}", url, status);
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.text().await.map_err(|e| FetchError::Network(e.to_string()))?;
        decode(&body)
    }
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, FetchError> {
    serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))
}

#[async_trait(?Send)]
impl RecipeSource for ForkifyClient {
    async fn search(&self, query: &str) -> Result<Vec<RecipeSummary>, FetchError> {
        let response: SearchResponse = self.get_json("search", &[("q", query)]).await?;
        Ok(response.recipes.into_iter().map(RecipeSummary::from).collect())
    }

    async fn fetch(&self, id: &str) -> Result<RecipeData, FetchError> {
        let response: RecipeResponse = self.get_json("get", &[("rId", id)]).await?;
        Ok(response.recipe.into())
    }
}
