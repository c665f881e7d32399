//! Cards section
//!
//! Six percentage cards built from four concurrent requests.

use futures_util::try_join;
use serde::Serialize;

use super::{SectionError, SectionKind};
use crate::api::{source, StatsSource};
use crate::stats::{
    CityStat, InstalacaoBreakdown, Percentage, PublicacaoBreakdown, VisitaBreakdown,
    VisitedCities,
};

/// Card titles in display order
pub const CARD_TITLES: [&str; 6] = [
    "Visitados",
    "Aprovados",
    "Reprovados",
    "Publicados",
    "Instalados",
    "Aguardando Instalacao",
];

/// Data behind one card
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardSummary {
    pub title: &'static str,
    pub percentage: Percentage,
    pub cities: Vec<CityStat>,
}

impl CardSummary {
    fn new(title: &'static str, percentage: Percentage, cities: Vec<CityStat>) -> Self {
        Self {
            title,
            percentage,
            cities,
        }
    }
}

/// Map the four responses onto the six cards
pub fn build_cards(
    visited: VisitedCities,
    visita: VisitaBreakdown,
    publicacao: PublicacaoBreakdown,
    instalacao: InstalacaoBreakdown,
) -> Vec<CardSummary> {
    vec![
        CardSummary::new(CARD_TITLES[0], visited.percentage, visited.visited_cities),
        CardSummary::new(CARD_TITLES[1], visita.approved_percentage, visita.approved_cities),
        CardSummary::new(CARD_TITLES[2], visita.rejected_percentage, visita.rejected_cities),
        CardSummary::new(
            CARD_TITLES[3],
            publicacao.published_percentage,
            publicacao.published_cities,
        ),
        CardSummary::new(
            CARD_TITLES[4],
            instalacao.installed_percentage,
            instalacao.installed_cities,
        ),
        CardSummary::new(
            CARD_TITLES[5],
            instalacao.awaiting_percentage,
            instalacao.awaiting_installation_cities,
        ),
    ]
}

/// Fetch everything the cards need; any failure fails the whole batch
pub async fn fetch_cards<S: StatsSource + ?Sized>(
    source: &S,
) -> Result<Vec<CardSummary>, SectionError> {
    let (visited, visita, publicacao, instalacao) = try_join!(
        source::visited_cities(source),
        source::visita_breakdown(source),
        source::publicacao_breakdown(source),
        source::instalacao_breakdown(source),
    )
    .map_err(|e| SectionError::new(SectionKind::Cards, e))?;

    Ok(build_cards(visited, visita, publicacao, instalacao))
}
