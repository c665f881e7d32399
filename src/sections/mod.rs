//! Dashboard Sections
//!
//! A section is a screen region fetched and rendered on its own. Each one
//! issues its requests concurrently and awaits them jointly; the first
//! failure fails the section and whatever already arrived is discarded.
//!
//! ## Sections
//!
//! - [`cards`]: percentage cards (4 requests)
//! - [`weekly`]: weekly schedule lists and production charts (3 requests)
//! - [`pies`]: status breakdown pie cascade (3 requests)

mod cancel;
pub mod cards;
pub mod pies;
mod status;
pub mod weekly;

pub use cancel::{cancellable, LoadGuard};
pub use cards::{fetch_cards, CardSummary, CARD_TITLES};
pub use pies::{fetch_pies, PieBreakdowns};
pub use status::FetchStatus;
pub use weekly::{fetch_weekly, WeeklyOverview};

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::api::{FetchError, StatsSource};
use crate::window::WeekWindow;

/// Identifies a section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Cards,
    Weekly,
    Pies,
}

impl SectionKind {
    pub const ALL: [SectionKind; 3] = [SectionKind::Cards, SectionKind::Weekly, SectionKind::Pies];

    /// The only error text users ever see for this section
    pub fn failure_message(self) -> &'static str {
        match self {
            SectionKind::Cards => "Failed to fetch card data",
            SectionKind::Weekly => "Failed to fetch data",
            SectionKind::Pies => "Failed to fetch pie chart data",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SectionKind::Cards => "cards",
            SectionKind::Weekly => "weekly",
            SectionKind::Pies => "pies",
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A section failed to load
///
/// Displays as the section's generic message; the cause is in `source`.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{}", .section.failure_message())]
pub struct SectionError {
    pub section: SectionKind,
    #[source]
    pub source: FetchError,
}

impl SectionError {
    pub fn new(section: SectionKind, source: FetchError) -> Self {
        Self { section, source }
    }
}

/// Payload of a successfully loaded section
#[derive(Debug, Clone, PartialEq)]
pub enum SectionData {
    Cards(Vec<CardSummary>),
    Weekly(WeeklyOverview),
    Pies(PieBreakdowns),
}

impl SectionData {
    pub fn kind(&self) -> SectionKind {
        match self {
            SectionData::Cards(_) => SectionKind::Cards,
            SectionData::Weekly(_) => SectionKind::Weekly,
            SectionData::Pies(_) => SectionKind::Pies,
        }
    }
}

/// Load one section
pub async fn load_section<S: StatsSource + ?Sized>(
    kind: SectionKind,
    source: &S,
    window: WeekWindow,
) -> Result<SectionData, SectionError> {
    let result = match kind {
        SectionKind::Cards => fetch_cards(source).await.map(SectionData::Cards),
        SectionKind::Weekly => fetch_weekly(source, window).await.map(SectionData::Weekly),
        SectionKind::Pies => fetch_pies(source).await.map(SectionData::Pies),
    };

    match &result {
        Ok(_) => tracing::info!(section = %kind, "section loaded"),
        Err(e) => tracing::warn!(section = %kind, cause = %e.source, "section failed"),
    }

    result
}
