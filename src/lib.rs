//! # SAEB Dashboard
//!
//! Client-side core of the SAEB municipal rollout dashboard: typed access to
//! the stats API, the weekly schedule filter, section loading and the view
//! state shared by the terminal and browser front ends.
//!
//! ## Modules
//!
//! - [`stats`]: wire types for municipalities, breakdowns and production series
//! - [`window`]: seven-day schedule window and the visit/installation filter
//! - [`api`]: endpoint catalog, the [`StatsSource`] trait and the HTTP client
//! - [`sections`]: concurrent per-section loading with cancellation
//! - [`view`]: dashboard state, card and pie interaction, terminal rendering
//! - `config`: TOML and environment configuration (`cli` feature)
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use saeb_dashboard::api::{ClientConfig, HttpStatsClient};
//! use saeb_dashboard::view::{render_dashboard, DashboardState, RenderOptions};
//! use saeb_dashboard::window::WeekWindow;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = HttpStatsClient::new(ClientConfig::default())?;
//!
//!     // Every section loads concurrently and fails on its own
//!     let state = DashboardState::load(&client, WeekWindow::now()).await;
//!
//!     println!("{}", render_dashboard(&state, &RenderOptions::default()));
//!     Ok(())
//! }
//! ```

pub mod api;
#[cfg(feature = "cli")]
pub mod config;
pub mod sections;
pub mod stats;
pub mod view;
pub mod window;

// Re-export top-level types for convenience
pub use api::{Endpoint, FetchError, FetchResult, StatsSource, TopCitiesQuery};

#[cfg(feature = "http")]
pub use api::{ClientConfig, HttpStatsClient};

pub use sections::{
    cancellable, load_section, FetchStatus, LoadGuard, SectionData, SectionError, SectionKind,
};

pub use stats::{Breakdown, Bucket, CityStat, MonthlyPoint, Percentage, StatusDimension, TopCity};

pub use view::{Action, DashboardState};

pub use window::{partition_week, WeekWindow, WeeklySchedule};

#[cfg(feature = "cli")]
pub use config::{Config, ConfigError, LoadedConfig};
