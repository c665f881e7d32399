//! Weekly section
//!
//! This week's visits and installations next to the production charts.

use futures_util::try_join;
use serde::Serialize;

use super::{SectionError, SectionKind};
use crate::api::{source, StatsSource};
use crate::stats::{MonthlyPoint, TopCity};
use crate::window::{partition_week, WeekWindow, WeeklySchedule};

/// Everything the weekly section renders
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklyOverview {
    pub window: WeekWindow,
    pub schedule: WeeklySchedule,
    /// Ranking for the bar chart, as returned
    pub top_cities: Vec<TopCity>,
    /// Series for the line chart, as returned
    pub monthly: Vec<MonthlyPoint>,
}

/// Fetch the weekly section and filter the schedule against `window`
pub async fn fetch_weekly<S: StatsSource + ?Sized>(
    source: &S,
    window: WeekWindow,
) -> Result<WeeklyOverview, SectionError> {
    let (records, top_cities, monthly) = try_join!(
        source::amplo_geral(source),
        source::top_cities(source),
        source::geral_mensal(source),
    )
    .map_err(|e| SectionError::new(SectionKind::Weekly, e))?;

    let schedule = partition_week(&records, &window);
    tracing::debug!(
        records = records.len(),
        visits = schedule.visits.len(),
        installations = schedule.installations.len(),
        "partitioned weekly schedule"
    );

    Ok(WeeklyOverview {
        window,
        schedule,
        top_cities,
        monthly,
    })
}
