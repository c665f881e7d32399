//! Stats API HTTP Client
//!
//! reqwest-backed [`StatsSource`] used by the native dashboard.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

use super::endpoint::{Endpoint, TopCitiesQuery, DEFAULT_API_BASE};
use super::error::{FetchError, FetchResult};
use super::source::StatsSource;

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the stats API (e.g., "http://localhost:3000/api/")
    pub base_url: String,
    /// Request timeout in milliseconds
    pub request_timeout_ms: u64,
    /// Production ranking parameters
    pub top_cities: TopCitiesQuery,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE.to_string(),
            request_timeout_ms: 10_000,
            top_cities: TopCitiesQuery::default(),
        }
    }
}

/// Stats API client over HTTP
pub struct HttpStatsClient {
    client: Client,
    config: ClientConfig,
}

impl HttpStatsClient {
    /// Create a new client with the given configuration
    pub fn new(config: ClientConfig) -> FetchResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .build()
            .map_err(|e| FetchError::Request(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Get the current configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

fn classify(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        FetchError::Timeout
    } else if err.is_connect() {
        FetchError::Unavailable(err.to_string())
    } else {
        FetchError::Request(err.to_string())
    }
}

#[async_trait(?Send)]
impl StatsSource for HttpStatsClient {
    async fn fetch_json(&self, endpoint: &Endpoint) -> FetchResult<Value> {
        let url = endpoint.url(&self.config.base_url);
        tracing::debug!(%url, "GET");

        let response = self.client.get(&url).send().await.map_err(classify)?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(FetchError::Status {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| FetchError::decode(endpoint.path(), e))
    }

    fn top_cities_query(&self) -> TopCitiesQuery {
        self.config.top_cities
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::source;
    use axum::{extract::Query, http::StatusCode, routing::get, Json, Router};
    use serde_json::json;
    use std::collections::HashMap;

    /// Serve a router on an ephemeral port and return its base URL
    async fn spawn_fixture(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}/api/", addr)
    }

    fn client_for(base_url: String) -> HttpStatsClient {
        HttpStatsClient::new(ClientConfig {
            base_url,
            request_timeout_ms: 2_000,
            top_cities: TopCitiesQuery::default(),
        })
        .unwrap()
    }

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:3000/api/");
        assert_eq!(config.top_cities.year, 2025);
        assert_eq!(config.top_cities.limit, 10);
    }

    #[tokio::test]
    async fn test_fetch_visited_cities() {
        let router = Router::new().route(
            "/api/amplo-geral/visited-cities",
            get(|| async {
                Json(json!({
                    "percentage": 58,
                    "visitedCities": [{"id": 1, "nome_municipio": "Salvador"}]
                }))
            }),
        );
        let client = client_for(spawn_fixture(router).await);

        let visited = source::visited_cities(&client).await.unwrap();
        assert_eq!(visited.percentage.to_string(), "58%");
        assert_eq!(visited.visited_cities[0].nome_municipio, "Salvador");
    }

    #[tokio::test]
    async fn test_top_cities_sends_query_params() {
        let router = Router::new().route(
            "/api/produtividade/top-cities",
            get(|Query(params): Query<HashMap<String, String>>| async move {
                let ano = params.get("ano").cloned().unwrap_or_default();
                let limit = params.get("limit").cloned().unwrap_or_default();
                Json(json!([
                    {"nome_municipio": format!("ano={}", ano), "total_quantidade": 1},
                    {"nome_municipio": format!("limit={}", limit), "total_quantidade": "2"}
                ]))
            }),
        );
        let client = client_for(spawn_fixture(router).await);

        let top = source::top_cities(&client).await.unwrap();
        assert_eq!(top[0].nome_municipio, "ano=2025");
        assert_eq!(top[1].nome_municipio, "limit=10");
        assert_eq!(top[1].total_quantidade, 2.0);
    }

    #[tokio::test]
    async fn test_non_success_status() {
        let router = Router::new().route(
            "/api/amplo-geral",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "database offline") }),
        );
        let client = client_for(spawn_fixture(router).await);

        let err = source::amplo_geral(&client).await.unwrap_err();
        assert_eq!(
            err,
            FetchError::Status {
                status: 500,
                message: "database offline".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_unknown_route_is_status_error() {
        let client = client_for(spawn_fixture(Router::new()).await);

        let err = source::geral_mensal(&client).await.unwrap_err();
        assert!(matches!(err, FetchError::Status { status: 404, .. }));
    }

    #[tokio::test]
    async fn test_body_of_wrong_shape() {
        let router = Router::new().route(
            "/api/produtividade/geral-mensal",
            get(|| async { Json(json!({"unexpected": true})) }),
        );
        let client = client_for(spawn_fixture(router).await);

        let err = source::geral_mensal(&client).await.unwrap_err();
        match err {
            FetchError::Decode { endpoint, .. } => {
                assert_eq!(endpoint, "produtividade/geral-mensal")
            }
            other => panic!("expected decode error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_connection_refused() {
        // Bind then drop to get a port nobody listens on
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = client_for(format!("http://{}/api/", addr));
        let err = source::visited_cities(&client).await.unwrap_err();
        assert!(matches!(err, FetchError::Unavailable(_)));
    }
}
