//! Expandable percentage card

use serde::Serialize;

use crate::sections::CardSummary;
use crate::stats::{CityStat, Percentage};

/// A card with its expand/collapse toggle
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardCard {
    pub summary: CardSummary,
    pub expanded: bool,
}

impl DashboardCard {
    /// A collapsed card
    pub fn new(summary: CardSummary) -> Self {
        Self {
            summary,
            expanded: false,
        }
    }

    pub fn title(&self) -> &'static str {
        self.summary.title
    }

    pub fn percentage(&self) -> Percentage {
        self.summary.percentage
    }

    /// Flip between expanded and collapsed
    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    /// Cities to list under the card; `None` while collapsed
    pub fn visible_cities(&self) -> Option<&[CityStat]> {
        self.expanded.then_some(self.summary.cities.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card() -> DashboardCard {
        DashboardCard::new(CardSummary {
            title: "Instalados",
            percentage: Percentage(40.0),
            cities: vec![CityStat::named("Salvador"), CityStat::named("Ilhéus")],
        })
    }

    #[test]
    fn test_starts_collapsed() {
        let card = card();
        assert!(!card.expanded);
        assert!(card.visible_cities().is_none());
    }

    #[test]
    fn test_toggle_twice_returns_to_collapsed() {
        let mut card = card();
        let original = card.clone();

        card.toggle();
        assert_eq!(card.visible_cities().map(|c| c.len()), Some(2));

        card.toggle();
        assert!(card.visible_cities().is_none());
        assert_eq!(card, original);
    }
}
