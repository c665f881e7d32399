//! In-memory stats source for tests

use async_trait::async_trait;
use serde_json::{json, Value};
use std::cell::RefCell;
use std::collections::HashMap;

use super::endpoint::Endpoint;
use super::error::{FetchError, FetchResult};
use super::source::StatsSource;

/// Serves canned bodies keyed by endpoint path
#[derive(Default)]
pub struct FixtureSource {
    bodies: HashMap<String, Value>,
    failures: HashMap<String, FetchError>,
    calls: RefCell<Vec<String>>,
}

impl FixtureSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// A source answering every endpoint with realistic data
    pub fn sample() -> Self {
        Self::new()
            .with(
                Endpoint::VisitedCities,
                json!({
                    "percentage": 58,
                    "visitedCities": [
                        {"id": 1, "nome_municipio": "Salvador"},
                        {"id": 2, "nome_municipio": "Feira de Santana"}
                    ]
                }),
            )
            .with(
                Endpoint::VisitaBreakdown,
                json!({
                    "approvedPercentage": 75,
                    "approvedCities": [{"id": 1, "nome_municipio": "Salvador"}],
                    "rejectedPercentage": 25,
                    "rejectedCities": [{"id": 2, "nome_municipio": "Feira de Santana"}]
                }),
            )
            .with(
                Endpoint::PublicacaoBreakdown,
                json!({
                    "publishedPercentage": 50,
                    "publishedCities": [{"id": 1, "nome_municipio": "Salvador"}],
                    "awaitingPercentage": 50,
                    "awaitingPublicationCities": [
                        {"id": 3, "nome_municipio": "Vitória da Conquista"}
                    ]
                }),
            )
            .with(
                Endpoint::InstalacaoBreakdown,
                json!({
                    "installedPercentage": 33.3,
                    "installedCities": [{"id": 1, "nome_municipio": "Salvador"}],
                    "awaitingPercentage": 66.7,
                    "awaitingInstallationCities": [
                        {"id": 4, "nome_municipio": "Camaçari"},
                        {"id": 5, "nome_municipio": "Itabuna"}
                    ]
                }),
            )
            .with(
                Endpoint::AmploGeral,
                json!([
                    {
                        "id": 1,
                        "nome_municipio": "Salvador",
                        "data_visita": "2025-01-02",
                        "data_instalacao": "2025-01-20"
                    },
                    {
                        "id": 4,
                        "nome_municipio": "Camaçari",
                        "data_visita": null,
                        "data_instalacao": "2025-01-07"
                    },
                    {"id": 5, "nome_municipio": "Itabuna", "data_visita": "2024-12-20"}
                ]),
            )
            .with(
                Endpoint::TopCities(Default::default()),
                json!([
                    {"nome_municipio": "Salvador", "total_quantidade": 1520},
                    {"nome_municipio": "Feira de Santana", "total_quantidade": 760}
                ]),
            )
            .with(
                Endpoint::GeralMensal,
                json!([
                    {"monthYear": "01/2025", "quantidade": 300},
                    {"monthYear": "02/2025", "quantidade": 450}
                ]),
            )
    }

    /// Builder: answer `endpoint` with `body`
    pub fn with(mut self, endpoint: Endpoint, body: Value) -> Self {
        self.bodies.insert(endpoint.path(), body);
        self
    }

    /// Builder: fail `endpoint` with `error`
    pub fn failing(mut self, endpoint: Endpoint, error: FetchError) -> Self {
        self.failures.insert(endpoint.path(), error);
        self
    }

    /// Paths requested so far, in order
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

#[async_trait(?Send)]
impl StatsSource for FixtureSource {
    async fn fetch_json(&self, endpoint: &Endpoint) -> FetchResult<Value> {
        let path = endpoint.path();
        self.calls.borrow_mut().push(path.clone());

        if let Some(err) = self.failures.get(&path) {
            return Err(err.clone());
        }

        self.bodies.get(&path).cloned().ok_or(FetchError::Status {
            status: 404,
            message: format!("no fixture for {}", path),
        })
    }
}
