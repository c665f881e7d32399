//! Pie cascade state
//!
//! The status pies are revealed one tier at a time: visita first, then
//! publicação, then instalação. Clicking a slice shows its city list;
//! double-clicking the visita or publicação pie reveals the next tier and
//! hides the list. The instalação pie has no reveal action.

use serde::Serialize;

use crate::sections::PieBreakdowns;
use crate::stats::{Bucket, CityStat, StatusDimension};

/// Slice colors, cycled by slot
pub const PIE_COLORS: [&str; 4] = ["#3182ce", "#e53e3e", "#38a169", "#d69e2e"];

/// Color for a slice slot
pub fn slice_color(slot: usize) -> &'static str {
    PIE_COLORS[slot % PIE_COLORS.len()]
}

/// The slice whose cities are displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SliceSelection {
    pub tier: StatusDimension,
    pub slot: usize,
}

/// Reveal and selection state of the pie section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PieCascade {
    revealed: StatusDimension,
    selection: Option<SliceSelection>,
}

impl Default for PieCascade {
    fn default() -> Self {
        Self {
            revealed: StatusDimension::Visita,
            selection: None,
        }
    }
}

impl PieCascade {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deepest tier currently shown
    pub fn revealed(&self) -> StatusDimension {
        self.revealed
    }

    pub fn is_revealed(&self, tier: StatusDimension) -> bool {
        tier <= self.revealed
    }

    /// Visible tiers in display order
    pub fn visible_tiers(&self) -> Vec<StatusDimension> {
        StatusDimension::ALL
            .into_iter()
            .filter(|tier| self.is_revealed(*tier))
            .collect()
    }

    pub fn selection(&self) -> Option<SliceSelection> {
        self.selection
    }

    /// Click on a slice. Ignored for hidden tiers and slots past the two buckets.
    pub fn select(&mut self, tier: StatusDimension, slot: usize) -> bool {
        if !self.is_revealed(tier) || slot >= 2 {
            return false;
        }
        self.selection = Some(SliceSelection { tier, slot });
        true
    }

    /// Double-click on a tier's pie.
    ///
    /// Reveals the next tier and clears the selection. Only the visita and
    /// publicação pies respond, and nothing happens once all tiers show.
    pub fn reveal_next(&mut self, from: StatusDimension) -> bool {
        if from == StatusDimension::Instalacao || !self.is_revealed(from) {
            return false;
        }
        match self.revealed.next() {
            Some(next) => {
                self.revealed = next;
                self.selection = None;
                true
            }
            None => false,
        }
    }

    /// Bucket of the selected slice
    pub fn selected_bucket<'a>(&self, data: &'a PieBreakdowns) -> Option<&'a Bucket> {
        let selection = self.selection?;
        data.get(selection.tier).bucket(selection.slot)
    }

    /// Cities of the selected slice
    pub fn selected_cities<'a>(&self, data: &'a PieBreakdowns) -> Option<&'a [CityStat]> {
        self.selected_bucket(data).map(|b| b.cities.as_slice())
    }
}
