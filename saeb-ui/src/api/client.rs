//! HTTP API Client
//!
//! gloo-net implementation of [`StatsSource`].

use async_trait::async_trait;
use gloo_net::http::Request;
use serde_json::Value;

use saeb_dashboard::api::{Endpoint, FetchError, FetchResult, StatsSource, DEFAULT_API_BASE};

/// Local storage key holding an API base override
const API_URL_KEY: &str = "saeb_api_url";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_URL_KEY).ok().flatten())
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
}

/// Stats API client over the browser's fetch
#[derive(Debug, Clone)]
pub struct GlooStatsClient {
    base_url: String,
}

impl GlooStatsClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Client for the configured API base
    pub fn from_storage() -> Self {
        Self::new(get_api_base())
    }
}

#[async_trait(?Send)]
impl StatsSource for GlooStatsClient {
    async fn fetch_json(&self, endpoint: &Endpoint) -> FetchResult<Value> {
        let url = endpoint.url(&self.base_url);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Unavailable(e.to_string()))?;

        if !response.ok() {
            let message = response.text().await.unwrap_or_default();
            return Err(FetchError::Status {
                status: response.status(),
                message,
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| FetchError::decode(endpoint.path(), e))
    }
}
