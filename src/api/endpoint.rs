//! Stats API endpoints
//!
//! The fixed set of read-only routes the dashboard consumes.

use serde::Serialize;
use std::fmt;

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:3000/api/";

/// Parameters of the production ranking request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TopCitiesQuery {
    pub year: i32,
    pub limit: u32,
}

impl Default for TopCitiesQuery {
    fn default() -> Self {
        Self {
            year: 2025,
            limit: 10,
        }
    }
}

/// A stats API route, relative to the base URL
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// `amplo-geral/visited-cities`
    VisitedCities,
    /// `amplo-geral/status-visita-breakdown`
    VisitaBreakdown,
    /// `amplo-geral/status-publicacao-breakdown`
    PublicacaoBreakdown,
    /// `amplo-geral/status-instalacao-breakdown`
    InstalacaoBreakdown,
    /// `amplo-geral`
    AmploGeral,
    /// `produtividade/top-cities?ano=..&limit=..`
    TopCities(TopCitiesQuery),
    /// `produtividade/geral-mensal`
    GeralMensal,
}

impl Endpoint {
    /// Path relative to the API base, including any query string
    pub fn path(&self) -> String {
        match self {
            Endpoint::VisitedCities => "amplo-geral/visited-cities".to_string(),
            Endpoint::VisitaBreakdown => "amplo-geral/status-visita-breakdown".to_string(),
            Endpoint::PublicacaoBreakdown => "amplo-geral/status-publicacao-breakdown".to_string(),
            Endpoint::InstalacaoBreakdown => "amplo-geral/status-instalacao-breakdown".to_string(),
            Endpoint::AmploGeral => "amplo-geral".to_string(),
            Endpoint::TopCities(query) => format!(
                "produtividade/top-cities?ano={}&limit={}",
                query.year, query.limit
            ),
            Endpoint::GeralMensal => "produtividade/geral-mensal".to_string(),
        }
    }

    /// Full URL against a base, tolerating a missing or doubled trailing slash
    pub fn url(&self, base: &str) -> String {
        format!("{}/{}", base.trim_end_matches('/'), self.path())
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
