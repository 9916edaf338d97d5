//! Forecast sample transformation.
//!
//! Turns sparse three-hourly provider samples into a dense hourly series for
//! charting and a per-day outlook. Everything here is pure: no I/O, no clock
//! reads, the caller supplies "now".

pub mod aggregate;
pub mod interpolate;
pub mod types;
pub mod utility;

pub use aggregate::{MAX_DAYS, aggregate_daily};
pub use interpolate::{DEFAULT_HOURS, interpolate_hourly};
pub use types::{Condition, DailySummary, ForecastSample, HourlySample};
