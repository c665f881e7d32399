//! Dashboard View
//!
//! UI state for the sections and a plain-text renderer.
//!
//! - [`DashboardCard`]: expand/collapse toggle over a card
//! - [`PieCascade`]: tier reveal and slice selection for the pies
//! - [`DashboardState`]: per-section fetch status driven by [`Action`]s
//! - [`render`]: terminal output

mod card;
mod pie;
pub mod render;
mod state;

pub use card::DashboardCard;
pub use pie::{slice_color, PieCascade, SliceSelection, PIE_COLORS};
pub use render::{render_dashboard, RenderOptions};
pub use state::{Action, DashboardState};
