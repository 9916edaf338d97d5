use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::warn;

use crate::series::{
    DailySummary, ForecastSample, HourlySample, aggregate_daily, interpolate_hourly,
};

/// Observed conditions at the requested location.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrentConditions {
    pub timestamp: i64,
    pub temperature: f64,
    pub feels_like: f64,
    pub humidity: f64,
    pub pressure: f64,
    pub wind_speed: f64,
    pub wind_direction: f64,
    pub visibility: f64,
    pub cloudiness: f64,
    pub description: String,
    pub condition_code: String,
    pub condition_label: String,
    pub sunrise: i64,
    pub sunset: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Location {
    pub name: String,
    pub country: String,
    pub lat: f64,
    pub lon: f64,
}

/// Everything the presentation layer needs for one location.
#[derive(Debug, Serialize)]
pub struct WeatherReport {
    /// `None` when the reference time has no calendar representation.
    pub generated_at: Option<DateTime<Utc>>,
    pub location: Option<Location>,
    pub current: Option<CurrentConditions>,
    pub hourly: Vec<HourlySample>,
    pub daily: Vec<DailySummary>,
}

impl WeatherReport {
    /// Builds the hourly and daily views from one batch of samples.
    ///
    /// `now` is epoch seconds and is used both as the interpolation anchor and
    /// as `generated_at`.
    pub fn from_samples(samples: &[ForecastSample], hours: usize, now: i64) -> Self {
        let generated_at = DateTime::from_timestamp(now, 0);
        if generated_at.is_none() {
            warn!(now, "Reference time has no calendar date, leaving generated_at empty");
        }

        WeatherReport {
            generated_at,
            location: None,
            current: None,
            hourly: interpolate_hourly(samples, hours, now),
            daily: aggregate_daily(samples),
        }
    }

    /// Attaches current conditions and their location.
    pub fn with_current(mut self, current: CurrentConditions, location: Location) -> Self {
        self.current = Some(current);
        self.location = Some(location);
        self
    }
}
