//! Value types flowing through the forecast pipeline.

use chrono::NaiveDate;
use serde::Serialize;

/// Icon id used when the provider reports no condition for a sample.
pub const FALLBACK_ICON: &str = "01d";

/// Main-condition label used when the provider reports no condition for a sample.
pub const FALLBACK_CONDITION: &str = "Clear";

/// Categorical weather condition: provider icon id plus main-condition label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Condition {
    pub code: String,
    pub label: String,
}

impl Condition {
    pub fn new(code: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            label: label.into(),
        }
    }
}

impl Default for Condition {
    fn default() -> Self {
        Self::new(FALLBACK_ICON, FALLBACK_CONDITION)
    }
}

/// One normalized provider forecast reading.
///
/// `precipitation_probability` is the provider fraction in `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastSample {
    pub timestamp: i64,
    pub temperature: f64,
    pub humidity: f64,
    pub precipitation_probability: f64,
    pub condition: Condition,
}

/// One entry of the dense hourly series.
///
/// `precipitation_probability` is on a 0–100 scale.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourlySample {
    pub timestamp: i64,
    pub temperature: f64,
    pub precipitation_probability: f64,
    pub condition_code: String,
    pub condition_label: String,
    pub humidity: f64,
}

/// Reduction of every sample sharing one UTC calendar date.
///
/// Only `temp_max` and `temp_min` span the whole day. The remaining fields are
/// taken from the first sample seen for the day and never updated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailySummary {
    pub day_key: NaiveDate,
    pub representative_timestamp: i64,
    pub temp_max: f64,
    pub temp_min: f64,
    pub condition_code: String,
    pub condition_label: String,
    pub precipitation_probability: f64,
    pub humidity: f64,
}
