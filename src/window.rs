//! Weekly Schedule Window
//!
//! Picks the municipalities with a visit or an installation coming up in the
//! next seven days.
//!
//! The window is `[start, start + 7 days]`, inclusive at both ends. Visit and
//! installation dates are checked independently, so a record can land in both
//! lists. A record whose date is missing is left out of that list. Input order
//! is preserved and no timezone normalization is applied.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use serde::Serialize;

use crate::stats::CityStat;

/// Length of the schedule window in days
pub const WINDOW_DAYS: i64 = 7;

/// Inclusive seven-day window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WeekWindow {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl WeekWindow {
    /// Window beginning at the given instant
    pub fn starting_at(start: DateTime<Utc>) -> Self {
        Self {
            start,
            end: start + Duration::days(WINDOW_DAYS),
        }
    }

    /// Window beginning at midnight UTC of the given date
    pub fn from_date(date: NaiveDate) -> Self {
        Self::starting_at(date.and_time(NaiveTime::default()).and_utc())
    }

    /// Window beginning now
    pub fn now() -> Self {
        Self::starting_at(Utc::now())
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Check if an instant falls inside the window (both ends included)
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        instant >= self.start && instant <= self.end
    }

    /// Like [`contains`](Self::contains); a missing date is never inside
    pub fn contains_opt(&self, instant: Option<DateTime<Utc>>) -> bool {
        instant.map(|at| self.contains(at)).unwrap_or(false)
    }
}

/// Records scheduled within a [`WeekWindow`]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WeeklySchedule {
    /// Records whose visit date is inside the window
    pub visits: Vec<CityStat>,
    /// Records whose installation date is inside the window
    pub installations: Vec<CityStat>,
}

impl WeeklySchedule {
    pub fn is_empty(&self) -> bool {
        self.visits.is_empty() && self.installations.is_empty()
    }
}

/// Split records into this week's visits and installations
pub fn partition_week(records: &[CityStat], window: &WeekWindow) -> WeeklySchedule {
    let visits = records
        .iter()
        .filter(|city| window.contains_opt(city.data_visita))
        .cloned()
        .collect();

    let installations = records
        .iter()
        .filter(|city| window.contains_opt(city.data_instalacao))
        .cloned()
        .collect();

    WeeklySchedule {
        visits,
        installations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn day(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    fn reference() -> WeekWindow {
        WeekWindow::from_date(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap())
    }

    #[test]
    fn test_window_bounds() {
        let window = reference();
        assert_eq!(window.start(), day(2025, 1, 1));
        assert_eq!(window.end(), day(2025, 1, 8));
    }

    #[test]
    fn test_visit_dates_reference_case() {
        let records = vec![
            CityStat::named("Alagoinhas").id(1).visit(day(2025, 1, 1)),
            CityStat::named("Barreiras").id(2).visit(day(2025, 1, 8)),
            CityStat::named("Candeias").id(3).visit(day(2025, 1, 9)),
            CityStat::named("Dias d'Ávila").id(4).visit(day(2024, 12, 31)),
            CityStat::named("Esplanada").id(5),
        ];

        let schedule = partition_week(&records, &reference());
        let names: Vec<_> = schedule
            .visits
            .iter()
            .map(|c| c.nome_municipio.as_str())
            .collect();

        assert_eq!(names, vec!["Alagoinhas", "Barreiras"]);
        assert!(schedule.installations.is_empty());
    }

    #[test]
    fn test_bounds_are_inclusive_to_the_instant() {
        let window = reference();

        assert!(window.contains(day(2025, 1, 1)));
        assert!(window.contains(day(2025, 1, 8)));
        assert!(!window.contains(day(2025, 1, 8) + Duration::seconds(1)));
        assert!(!window.contains(day(2025, 1, 1) - Duration::seconds(1)));
        assert!(!window.contains_opt(None));
    }

    #[test]
    fn test_dimensions_are_independent() {
        let records = vec![
            // Visit in range, installation missing
            CityStat::named("Jequié").visit(day(2025, 1, 3)),
            // Installation in range, visit long past
            CityStat::named("Juazeiro")
                .visit(day(2024, 6, 1))
                .installation(day(2025, 1, 5)),
            // Both in range
            CityStat::named("Itabuna")
                .visit(day(2025, 1, 2))
                .installation(day(2025, 1, 7)),
            // Installation missing, visit out of range
            CityStat::named("Paulo Afonso").visit(day(2025, 2, 1)),
        ];

        let schedule = partition_week(&records, &reference());

        let visits: Vec<_> = schedule.visits.iter().map(|c| c.nome_municipio.as_str()).collect();
        let installs: Vec<_> = schedule
            .installations
            .iter()
            .map(|c| c.nome_municipio.as_str())
            .collect();

        assert_eq!(visits, vec!["Jequié", "Itabuna"]);
        assert_eq!(installs, vec!["Juazeiro", "Itabuna"]);
    }

    #[test]
    fn test_partition_from_wire_records() {
        let json = r#"[
            {"id": 1, "nome_municipio": "Ilhéus",
             "data_visita": "2025-01-04T14:00:00.000Z", "data_instalacao": null},
            {"id": 2, "nome_municipio": "Irecê",
             "data_visita": "", "data_instalacao": "2025-01-06"},
            {"id": 3, "nome_municipio": "Jacobina"}
        ]"#;
        let records: Vec<CityStat> = serde_json::from_str(json).unwrap();

        let schedule = partition_week(&records, &reference());

        assert_eq!(schedule.visits.len(), 1);
        assert_eq!(schedule.visits[0].nome_municipio, "Ilhéus");
        assert_eq!(schedule.installations.len(), 1);
        assert_eq!(schedule.installations[0].nome_municipio, "Irecê");
    }

    #[test]
    fn test_empty_input() {
        let schedule = partition_week(&[], &WeekWindow::now());
        assert!(schedule.is_empty());
    }
}
