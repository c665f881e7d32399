//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod charts;
pub mod city_list;
pub mod header;
pub mod loading;
pub mod stat_card;

pub use charts::{BarChart, LineChart, PieChart};
pub use city_list::CityList;
pub use header::Header;
pub use loading::{Loading, SectionFailed};
pub use stat_card::StatCard;
