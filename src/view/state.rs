//! Dashboard view state
//!
//! All screen state lives in [`DashboardState`] and only changes through
//! [`DashboardState::apply`]. Each section carries its own [`FetchStatus`],
//! so one failed section never hides another.

use futures_util::join;
use serde::Serialize;

use super::card::DashboardCard;
use super::pie::PieCascade;
use crate::api::StatsSource;
use crate::sections::{
    load_section, FetchStatus, PieBreakdowns, SectionData, SectionError, SectionKind,
    WeeklyOverview,
};
use crate::stats::StatusDimension;
use crate::window::WeekWindow;

/// State transitions
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// A section load was issued
    Started(SectionKind),
    /// A section load completed
    Loaded(SectionData),
    /// A section load failed
    Failed(SectionError),
    /// Card at index was clicked
    ToggleCard(usize),
    /// Pie slice was clicked
    SelectSlice { tier: StatusDimension, slot: usize },
    /// Pie was double-clicked
    RevealNext { from: StatusDimension },
}

impl Action {
    /// Action for the outcome of a section load
    pub fn settled(result: Result<SectionData, SectionError>) -> Self {
        match result {
            Ok(data) => Action::Loaded(data),
            Err(e) => Action::Failed(e),
        }
    }
}

/// Everything the dashboard renders
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DashboardState {
    pub cards: FetchStatus<Vec<DashboardCard>>,
    pub weekly: FetchStatus<WeeklyOverview>,
    pub pies: FetchStatus<PieBreakdowns>,
    pub cascade: PieCascade,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply an action; returns whether anything changed
    pub fn apply(&mut self, action: Action) -> bool {
        match action {
            Action::Started(kind) => {
                match kind {
                    SectionKind::Cards => self.cards.begin(),
                    SectionKind::Weekly => self.weekly.begin(),
                    SectionKind::Pies => {
                        self.pies.begin();
                        self.cascade = PieCascade::new();
                    }
                }
                true
            }
            Action::Loaded(data) => {
                match data {
                    SectionData::Cards(summaries) => {
                        self.cards = FetchStatus::Loaded(
                            summaries.into_iter().map(DashboardCard::new).collect(),
                        );
                    }
                    SectionData::Weekly(overview) => self.weekly = FetchStatus::Loaded(overview),
                    SectionData::Pies(breakdowns) => {
                        self.pies = FetchStatus::Loaded(breakdowns);
                        self.cascade = PieCascade::new();
                    }
                }
                true
            }
            Action::Failed(err) => {
                let reason = err.source.to_string();
                match err.section {
                    SectionKind::Cards => self.cards = FetchStatus::Failed(reason),
                    SectionKind::Weekly => self.weekly = FetchStatus::Failed(reason),
                    SectionKind::Pies => self.pies = FetchStatus::Failed(reason),
                }
                true
            }
            Action::ToggleCard(index) => match self
                .cards
                .loaded_mut()
                .and_then(|cards| cards.get_mut(index))
            {
                Some(card) => {
                    card.toggle();
                    true
                }
                None => false,
            },
            Action::SelectSlice { tier, slot } => {
                self.pies.loaded().is_some() && self.cascade.select(tier, slot)
            }
            Action::RevealNext { from } => {
                self.pies.loaded().is_some() && self.cascade.reveal_next(from)
            }
        }
    }

    pub fn is_loading(&self, kind: SectionKind) -> bool {
        match kind {
            SectionKind::Cards => self.cards.is_loading(),
            SectionKind::Weekly => self.weekly.is_loading(),
            SectionKind::Pies => self.pies.is_loading(),
        }
    }

    /// User-facing error text for a failed section
    pub fn error_message(&self, kind: SectionKind) -> Option<&'static str> {
        let failed = match kind {
            SectionKind::Cards => self.cards.is_failed(),
            SectionKind::Weekly => self.weekly.is_failed(),
            SectionKind::Pies => self.pies.is_failed(),
        };
        failed.then(|| kind.failure_message())
    }

    /// Load every section concurrently and settle each one independently
    pub async fn load<S: StatsSource + ?Sized>(source: &S, window: WeekWindow) -> Self {
        let mut state = Self::new();
        for kind in SectionKind::ALL {
            state.apply(Action::Started(kind));
        }

        let (cards, weekly, pies) = join!(
            load_section(SectionKind::Cards, source, window),
            load_section(SectionKind::Weekly, source, window),
            load_section(SectionKind::Pies, source, window),
        );

        for result in [cards, weekly, pies] {
            state.apply(Action::settled(result));
        }
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fixture::FixtureSource;
    use crate::api::{Endpoint, FetchError};
    use chrono::NaiveDate;

    fn window() -> WeekWindow {
        WeekWindow::from_date(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap())
    }

    #[tokio::test]
    async fn test_load_all_sections() {
        let state = DashboardState::load(&FixtureSource::sample(), window()).await;

        assert_eq!(state.cards.loaded().map(|c| c.len()), Some(6));
        assert!(state.weekly.loaded().is_some());
        assert!(state.pies.loaded().is_some());
        for kind in SectionKind::ALL {
            assert!(!state.is_loading(kind));
            assert!(state.error_message(kind).is_none());
        }
    }

    #[tokio::test]
    async fn test_shared_endpoint_failure_hits_both_sections() {
        // The visita breakdown feeds both cards and pies
        let source =
            FixtureSource::sample().failing(Endpoint::VisitaBreakdown, FetchError::Timeout);
        let state = DashboardState::load(&source, window()).await;

        assert_eq!(
            state.error_message(SectionKind::Cards),
            Some("Failed to fetch card data")
        );
        assert_eq!(
            state.error_message(SectionKind::Pies),
            Some("Failed to fetch pie chart data")
        );
        assert!(state.weekly.loaded().is_some());
        assert_eq!(state.pies.failure(), Some("Request timeout"));
    }

    #[test]
    fn test_started_enters_loading() {
        let mut state = DashboardState::new();
        assert!(state.cards.is_idle());

        state.apply(Action::Started(SectionKind::Cards));
        assert!(state.is_loading(SectionKind::Cards));
        assert!(!state.is_loading(SectionKind::Pies));
    }

    #[tokio::test]
    async fn test_toggle_card() {
        let mut state = DashboardState::load(&FixtureSource::sample(), window()).await;

        assert!(state.apply(Action::ToggleCard(0)));
        assert!(state.cards.loaded().unwrap()[0].expanded);

        assert!(state.apply(Action::ToggleCard(0)));
        assert!(state.cards.loaded().unwrap()[0].visible_cities().is_none());

        assert!(!state.apply(Action::ToggleCard(99)));
    }

    #[test]
    fn test_toggle_before_load_is_ignored() {
        let mut state = DashboardState::new();
        assert!(!state.apply(Action::ToggleCard(0)));
    }

    #[tokio::test]
    async fn test_pie_interactions() {
        let mut state = DashboardState::load(&FixtureSource::sample(), window()).await;

        assert!(state.apply(Action::SelectSlice {
            tier: StatusDimension::Visita,
            slot: 0
        }));
        assert!(state.apply(Action::RevealNext {
            from: StatusDimension::Visita
        }));
        assert!(state.cascade.selection().is_none());
        assert!(state.cascade.is_revealed(StatusDimension::Publicacao));

        // Reloading pies resets the cascade
        state.apply(Action::Started(SectionKind::Pies));
        assert_eq!(state.cascade, PieCascade::new());
        assert!(!state.apply(Action::SelectSlice {
            tier: StatusDimension::Visita,
            slot: 0
        }));
    }

    #[tokio::test]
    async fn test_reveal_every_tier_through_actions() {
        let mut state = DashboardState::load(&FixtureSource::sample(), window()).await;

        while state.cascade.revealed() < StatusDimension::Instalacao {
            let from = state.cascade.revealed();
            assert!(state.apply(Action::RevealNext { from }));
        }
        assert_eq!(state.cascade.visible_tiers().len(), 3);
        assert!(!state.apply(Action::RevealNext {
            from: StatusDimension::Instalacao
        }));

        assert!(state.apply(Action::SelectSlice {
            tier: StatusDimension::Instalacao,
            slot: 1
        }));
        let pies = state.pies.loaded().unwrap();
        assert!(state.cascade.selected_cities(pies).is_some());
    }
}
