//! Stats Data Model
//!
//! Shapes returned by the stats API, held for the lifetime of a page view.
//!
//! ## Types
//!
//! - [`CityStat`]: one municipality record with optional visit/installation dates
//! - [`VisitedCities`] and the three status breakdown responses
//! - [`Breakdown`]: a status dimension normalized into two labelled buckets
//! - [`TopCity`] and [`MonthlyPoint`]: productivity ranking and time series
//!
//! Values are trusted as received. Nothing here checks that percentages fall
//! in `[0, 100]` or that breakdown city lists are disjoint.

mod breakdown;
mod lenient;
mod types;

pub use breakdown::{
    Breakdown, Bucket, InstalacaoBreakdown, PublicacaoBreakdown, StatusDimension,
    VisitaBreakdown, VisitedCities,
};
pub use lenient::parse_api_date;
pub use types::{CityId, CityStat, MonthlyPoint, Percentage, TopCity};
