//! HTTP client for the restaurant menu API

use crate::{ClientConfig, ClientError, ClientResult, ErrorBody};
use reqwest::Client;
use serde::de::DeserializeOwned;
use shared::models::{HighlightedItem, RestaurantRecord};
use tracing::debug;

/// HTTP client for the two menu endpoints
#[derive(Debug, Clone)]
pub struct MenuApi {
    client: Client,
    api_base: String,
}

impl MenuApi {
    /// Create a new API client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            api_base: config.api_base(),
        }
    }

    /// `GET {base}/api/restaurants/{id}/`
    pub async fn restaurant(&self, id: i64) -> ClientResult<RestaurantRecord> {
        self.get_json(&format!("{id}/")).await
    }

    /// `GET {base}/api/restaurants/{id}/highlighted-items/`
    pub async fn highlighted_items(&self, id: i64) -> ClientResult<Vec<HighlightedItem>> {
        self.get_json(&format!("{id}/highlighted-items/")).await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let url = format!("{}/{}", self.api_base, path);
        debug!(%url, "menu API request");

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            // Body may carry { message?, detail? }; anything else is treated
            // as an empty error body
            let body = response.json::<ErrorBody>().await.unwrap_or_default();
            return Err(ClientError::Api { status, body });
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes)
            .map_err(|err| ClientError::MalformedResponse(err.to_string()))
    }
}
