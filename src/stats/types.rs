//! Core stats types
//!
//! Municipality records, productivity series and the percentage newtype.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;
use std::fmt;

use super::lenient;

/// Municipality identifier as sent by the API
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CityId {
    Number(i64),
    Text(String),
}

impl fmt::Display for CityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CityId::Number(n) => write!(f, "{}", n),
            CityId::Text(s) => f.write_str(s),
        }
    }
}

/// A single municipality record
///
/// Fields the dashboard does not interpret are kept in `extra` so a record
/// can be re-serialized without loss.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityStat {
    #[serde(default)]
    pub id: Option<CityId>,

    #[serde(default, deserialize_with = "lenient::string")]
    pub nome_municipio: String,

    /// Scheduled or completed visit
    #[serde(default, alias = "date_visita", deserialize_with = "lenient::optional_date")]
    pub data_visita: Option<DateTime<Utc>>,

    /// Scheduled or completed kiosk installation
    #[serde(
        default,
        alias = "date_instalacao",
        deserialize_with = "lenient::optional_date"
    )]
    pub data_instalacao: Option<DateTime<Utc>>,

    #[serde(default, deserialize_with = "lenient::optional_number")]
    pub quantidade: Option<f64>,

    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl CityStat {
    /// Create a record with just a name
    pub fn named(nome_municipio: impl Into<String>) -> Self {
        Self {
            id: None,
            nome_municipio: nome_municipio.into(),
            data_visita: None,
            data_instalacao: None,
            quantidade: None,
            extra: HashMap::new(),
        }
    }

    /// Builder: set the id
    pub fn id(mut self, id: i64) -> Self {
        self.id = Some(CityId::Number(id));
        self
    }

    /// Builder: set the visit date
    pub fn visit(mut self, at: DateTime<Utc>) -> Self {
        self.data_visita = Some(at);
        self
    }

    /// Builder: set the installation date
    pub fn installation(mut self, at: DateTime<Utc>) -> Self {
        self.data_instalacao = Some(at);
        self
    }
}

/// Percentage as computed by the service
///
/// Displays as the source number followed by `%`. No rounding is applied, so
/// `45` renders as `45%` and `45.5` as `45.5%`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize)]
#[serde(transparent)]
pub struct Percentage(pub f64);

impl Percentage {
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl<'de> Deserialize<'de> for Percentage {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        lenient::number(deserializer).map(Percentage)
    }
}

impl From<f64> for Percentage {
    fn from(value: f64) -> Self {
        Percentage(value)
    }
}

/// Entry of the yearly CIN production ranking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopCity {
    #[serde(default, deserialize_with = "lenient::string")]
    pub nome_municipio: String,

    #[serde(deserialize_with = "lenient::number")]
    pub total_quantidade: f64,
}

/// Monthly CIN production across all municipalities
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyPoint {
    #[serde(rename = "monthYear")]
    pub month_year: String,

    #[serde(deserialize_with = "lenient::number")]
    pub quantidade: f64,
}
