//! Stats source abstraction
//!
//! [`StatsSource`] is the seam between the dashboard and the transport. The
//! native build implements it with reqwest, the browser build with gloo-net,
//! and tests with canned bodies. Typed accessors decode on top of it.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::endpoint::{Endpoint, TopCitiesQuery};
use super::error::{FetchError, FetchResult};
use crate::stats::{
    CityStat, InstalacaoBreakdown, MonthlyPoint, PublicacaoBreakdown, TopCity, VisitaBreakdown,
    VisitedCities,
};

/// Anything that can answer GET requests against the stats API
#[async_trait(?Send)]
pub trait StatsSource {
    /// Fetch the JSON body of an endpoint
    async fn fetch_json(&self, endpoint: &Endpoint) -> FetchResult<Value>;

    /// Parameters used for the production ranking
    fn top_cities_query(&self) -> TopCitiesQuery {
        TopCitiesQuery::default()
    }
}

async fn fetch<T, S>(source: &S, endpoint: Endpoint) -> FetchResult<T>
where
    T: DeserializeOwned,
    S: StatsSource + ?Sized,
{
    let body = source.fetch_json(&endpoint).await?;
    serde_json::from_value(body).map_err(|e| FetchError::decode(endpoint.path(), e))
}

/// `GET amplo-geral/visited-cities`
pub async fn visited_cities<S: StatsSource + ?Sized>(source: &S) -> FetchResult<VisitedCities> {
    fetch(source, Endpoint::VisitedCities).await
}

/// `GET amplo-geral/status-visita-breakdown`
pub async fn visita_breakdown<S: StatsSource + ?Sized>(source: &S) -> FetchResult<VisitaBreakdown> {
    fetch(source, Endpoint::VisitaBreakdown).await
}

/// `GET amplo-geral/status-publicacao-breakdown`
pub async fn publicacao_breakdown<S: StatsSource + ?Sized>(
    source: &S,
) -> FetchResult<PublicacaoBreakdown> {
    fetch(source, Endpoint::PublicacaoBreakdown).await
}

/// `GET amplo-geral/status-instalacao-breakdown`
pub async fn instalacao_breakdown<S: StatsSource + ?Sized>(
    source: &S,
) -> FetchResult<InstalacaoBreakdown> {
    fetch(source, Endpoint::InstalacaoBreakdown).await
}

/// `GET amplo-geral`
pub async fn amplo_geral<S: StatsSource + ?Sized>(source: &S) -> FetchResult<Vec<CityStat>> {
    fetch(source, Endpoint::AmploGeral).await
}

/// `GET produtividade/top-cities`
pub async fn top_cities<S: StatsSource + ?Sized>(source: &S) -> FetchResult<Vec<TopCity>> {
    let query = source.top_cities_query();
    fetch(source, Endpoint::TopCities(query)).await
}

/// `GET produtividade/geral-mensal`
pub async fn geral_mensal<S: StatsSource + ?Sized>(source: &S) -> FetchResult<Vec<MonthlyPoint>> {
    fetch(source, Endpoint::GeralMensal).await
}
