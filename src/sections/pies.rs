//! Pie section
//!
//! The three status breakdowns behind the pie cascade.

use futures_util::try_join;
use serde::Serialize;

use super::{SectionError, SectionKind};
use crate::api::{source, StatsSource};
use crate::stats::{Breakdown, StatusDimension};

/// One breakdown per status dimension
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieBreakdowns {
    pub visita: Breakdown,
    pub publicacao: Breakdown,
    pub instalacao: Breakdown,
}

impl PieBreakdowns {
    /// Breakdown for a dimension
    pub fn get(&self, dimension: StatusDimension) -> &Breakdown {
        match dimension {
            StatusDimension::Visita => &self.visita,
            StatusDimension::Publicacao => &self.publicacao,
            StatusDimension::Instalacao => &self.instalacao,
        }
    }
}

/// Fetch all three breakdowns; any failure fails the whole batch
pub async fn fetch_pies<S: StatsSource + ?Sized>(
    source: &S,
) -> Result<PieBreakdowns, SectionError> {
    let (visita, publicacao, instalacao) = try_join!(
        source::visita_breakdown(source),
        source::publicacao_breakdown(source),
        source::instalacao_breakdown(source),
    )
    .map_err(|e| SectionError::new(SectionKind::Pies, e))?;

    Ok(PieBreakdowns {
        visita: visita.into(),
        publicacao: publicacao.into(),
        instalacao: instalacao.into(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fixture::FixtureSource;
    use crate::api::{Endpoint, FetchError};

    #[tokio::test]
    async fn test_breakdowns_by_dimension() {
        let pies = fetch_pies(&FixtureSource::sample()).await.unwrap();

        for dim in StatusDimension::ALL {
            assert_eq!(pies.get(dim).dimension, dim);
        }

        let publicacao = pies.get(StatusDimension::Publicacao);
        assert_eq!(publicacao.buckets[1].label, "Ag. Publicação");
        assert_eq!(
            publicacao.buckets[1].cities[0].nome_municipio,
            "Vitória da Conquista"
        );
    }

    #[tokio::test]
    async fn test_decode_failure_fails_section() {
        let source = FixtureSource::sample()
            .with(Endpoint::VisitaBreakdown, serde_json::json!({"approvedCities": []}));

        let err = fetch_pies(&source).await.unwrap_err();
        assert_eq!(err.section, SectionKind::Pies);
        assert!(matches!(err.source, FetchError::Decode { .. }));
        assert_eq!(err.to_string(), "Failed to fetch pie chart data");
    }
}
