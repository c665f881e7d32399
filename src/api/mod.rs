//! Stats API
//!
//! Read-only client side of the external stats service.
//!
//! # Endpoints
//!
//! - `GET amplo-geral/visited-cities`
//! - `GET amplo-geral/status-visita-breakdown`
//! - `GET amplo-geral/status-publicacao-breakdown`
//! - `GET amplo-geral/status-instalacao-breakdown`
//! - `GET amplo-geral`
//! - `GET produtividade/top-cities?ano=2025&limit=10`
//! - `GET produtividade/geral-mensal`
//!
//! There is no authentication, no pagination beyond `limit`, and no retry.

#[cfg(feature = "http")]
mod client;
mod endpoint;
mod error;
pub mod source;

#[cfg(test)]
pub(crate) mod fixture;

#[cfg(feature = "http")]
pub use client::{ClientConfig, HttpStatsClient};
pub use endpoint::{Endpoint, TopCitiesQuery, DEFAULT_API_BASE};
pub use error::{FetchError, FetchResult};
pub use source::StatsSource;
