//! Status breakdowns
//!
//! The service splits municipalities into two buckets per status dimension.
//! Each response has its own field names; [`Breakdown`] gives them one shape.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::types::{CityStat, Percentage};

/// `GET amplo-geral/visited-cities`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitedCities {
    pub percentage: Percentage,
    #[serde(default)]
    pub visited_cities: Vec<CityStat>,
}

/// `GET amplo-geral/status-visita-breakdown`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitaBreakdown {
    pub approved_percentage: Percentage,
    #[serde(default)]
    pub approved_cities: Vec<CityStat>,
    pub rejected_percentage: Percentage,
    #[serde(default)]
    pub rejected_cities: Vec<CityStat>,
}

/// `GET amplo-geral/status-publicacao-breakdown`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicacaoBreakdown {
    pub published_percentage: Percentage,
    #[serde(default)]
    pub published_cities: Vec<CityStat>,
    pub awaiting_percentage: Percentage,
    #[serde(default)]
    pub awaiting_publication_cities: Vec<CityStat>,
}

/// `GET amplo-geral/status-instalacao-breakdown`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstalacaoBreakdown {
    pub installed_percentage: Percentage,
    #[serde(default)]
    pub installed_cities: Vec<CityStat>,
    pub awaiting_percentage: Percentage,
    #[serde(default)]
    pub awaiting_installation_cities: Vec<CityStat>,
}

/// Status dimension of the rollout, in pipeline order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusDimension {
    Visita,
    Publicacao,
    Instalacao,
}

impl StatusDimension {
    /// All dimensions in pipeline order
    pub const ALL: [StatusDimension; 3] = [
        StatusDimension::Visita,
        StatusDimension::Publicacao,
        StatusDimension::Instalacao,
    ];

    /// The dimension that follows this one, if any
    pub fn next(self) -> Option<StatusDimension> {
        match self {
            StatusDimension::Visita => Some(StatusDimension::Publicacao),
            StatusDimension::Publicacao => Some(StatusDimension::Instalacao),
            StatusDimension::Instalacao => None,
        }
    }

    /// 1-based position in the pipeline
    pub fn ordinal(self) -> usize {
        match self {
            StatusDimension::Visita => 1,
            StatusDimension::Publicacao => 2,
            StatusDimension::Instalacao => 3,
        }
    }

    /// Inverse of [`ordinal`](Self::ordinal)
    pub fn from_ordinal(ordinal: usize) -> Option<StatusDimension> {
        match ordinal {
            1 => Some(StatusDimension::Visita),
            2 => Some(StatusDimension::Publicacao),
            3 => Some(StatusDimension::Instalacao),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StatusDimension::Visita => "visita",
            StatusDimension::Publicacao => "publicacao",
            StatusDimension::Instalacao => "instalacao",
        }
    }
}

impl fmt::Display for StatusDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One labelled share of a breakdown
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bucket {
    pub label: &'static str,
    pub percentage: Percentage,
    pub cities: Vec<CityStat>,
}

impl Bucket {
    fn new(label: &'static str, percentage: Percentage, cities: Vec<CityStat>) -> Self {
        Self {
            label,
            percentage,
            cities,
        }
    }
}

/// A status dimension split into its two buckets
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Breakdown {
    pub dimension: StatusDimension,
    pub buckets: [Bucket; 2],
}

impl Breakdown {
    /// Bucket at `slot` (0 or 1)
    pub fn bucket(&self, slot: usize) -> Option<&Bucket> {
        self.buckets.get(slot)
    }
}

impl From<VisitaBreakdown> for Breakdown {
    fn from(raw: VisitaBreakdown) -> Self {
        Self {
            dimension: StatusDimension::Visita,
            buckets: [
                Bucket::new("Aprovados", raw.approved_percentage, raw.approved_cities),
                Bucket::new("Reprovados", raw.rejected_percentage, raw.rejected_cities),
            ],
        }
    }
}

impl From<PublicacaoBreakdown> for Breakdown {
    fn from(raw: PublicacaoBreakdown) -> Self {
        Self {
            dimension: StatusDimension::Publicacao,
            buckets: [
                Bucket::new("Publicados", raw.published_percentage, raw.published_cities),
                Bucket::new(
                    "Ag. Publicação",
                    raw.awaiting_percentage,
                    raw.awaiting_publication_cities,
                ),
            ],
        }
    }
}

impl From<InstalacaoBreakdown> for Breakdown {
    fn from(raw: InstalacaoBreakdown) -> Self {
        Self {
            dimension: StatusDimension::Instalacao,
            buckets: [
                Bucket::new("Instalados", raw.installed_percentage, raw.installed_cities),
                Bucket::new(
                    "Ag. Instalação",
                    raw.awaiting_percentage,
                    raw.awaiting_installation_cities,
                ),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_instalacao_breakdown() {
        let json = r#"{
            "installedPercentage": 40,
            "installedCities": [{"id": 1, "nome_municipio": "Salvador"}],
            "awaitingPercentage": 60,
            "awaitingInstallationCities": [
                {"id": 2, "nome_municipio": "Camaçari"},
                {"id": 3, "nome_municipio": "Lauro de Freitas"}
            ]
        }"#;

        let raw: InstalacaoBreakdown = serde_json::from_str(json).unwrap();
        let breakdown = Breakdown::from(raw);

        assert_eq!(breakdown.dimension, StatusDimension::Instalacao);
        assert_eq!(breakdown.buckets[0].label, "Instalados");
        assert_eq!(breakdown.buckets[0].percentage.to_string(), "40%");
        assert_eq!(breakdown.buckets[1].label, "Ag. Instalação");
        assert_eq!(breakdown.buckets[1].cities.len(), 2);
    }

    #[test]
    fn test_missing_city_lists_default_to_empty() {
        let json = r#"{"approvedPercentage": 75, "rejectedPercentage": 25}"#;
        let raw: VisitaBreakdown = serde_json::from_str(json).unwrap();

        assert!(raw.approved_cities.is_empty());
        assert!(raw.rejected_cities.is_empty());
    }

    #[test]
    fn test_missing_percentage_is_an_error() {
        let json = r#"{"publishedCities": []}"#;
        assert!(serde_json::from_str::<PublicacaoBreakdown>(json).is_err());
    }

    #[test]
    fn test_dimension_order() {
        assert_eq!(StatusDimension::Visita.next(), Some(StatusDimension::Publicacao));
        assert_eq!(StatusDimension::Instalacao.next(), None);
        assert!(StatusDimension::Visita < StatusDimension::Instalacao);

        for dim in StatusDimension::ALL {
            assert_eq!(StatusDimension::from_ordinal(dim.ordinal()), Some(dim));
        }
        assert_eq!(StatusDimension::from_ordinal(4), None);
    }
}
