//! JSON decoding for provider forecast and current-conditions responses.
//!
//! This is where missing provider fields get their defaults, so the series
//! pipeline only ever sees fully populated samples.

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::report::{CurrentConditions, Location};
use crate::series::types::{Condition, ForecastSample};

#[derive(Debug, Deserialize)]
pub struct RawForecast {
    pub list: Vec<RawForecastItem>,
}

/// One three-hourly entry of the provider forecast list.
#[derive(Debug, Deserialize)]
pub struct RawForecastItem {
    pub dt: i64,
    pub main: RawForecastMain,
    #[serde(default)]
    pub weather: Vec<RawWeather>,
    #[serde(default)]
    pub pop: f64,
}

#[derive(Debug, Deserialize)]
pub struct RawForecastMain {
    pub temp: f64,
    pub humidity: f64,
}

#[derive(Debug, Deserialize)]
pub struct RawWeather {
    pub icon: String,
    pub main: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct RawCurrent {
    pub coord: RawCoord,
    pub name: String,
    pub sys: RawSys,
    pub main: RawCurrentMain,
    pub wind: RawWind,
    #[serde(default)]
    pub visibility: f64,
    pub clouds: RawClouds,
    #[serde(default)]
    pub weather: Vec<RawWeather>,
    pub dt: i64,
}

#[derive(Debug, Deserialize)]
pub struct RawCoord {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Deserialize)]
pub struct RawSys {
    pub country: String,
    pub sunrise: i64,
    pub sunset: i64,
}

#[derive(Debug, Deserialize)]
pub struct RawCurrentMain {
    pub temp: f64,
    pub feels_like: f64,
    pub humidity: f64,
    pub pressure: f64,
}

#[derive(Debug, Deserialize)]
pub struct RawWind {
    pub speed: f64,
    #[serde(default)]
    pub deg: f64,
}

#[derive(Debug, Deserialize)]
pub struct RawClouds {
    pub all: f64,
}

fn first_condition(weather: &[RawWeather], fallback: &Condition) -> Condition {
    weather
        .first()
        .map(|w| Condition::new(&w.icon, &w.main))
        .unwrap_or_else(|| fallback.clone())
}

impl RawForecastItem {
    /// Normalizes the entry, substituting `fallback` when no condition is reported.
    pub fn into_sample(self, fallback: &Condition) -> ForecastSample {
        ForecastSample {
            timestamp: self.dt,
            temperature: self.main.temp,
            humidity: self.main.humidity,
            precipitation_probability: self.pop,
            condition: first_condition(&self.weather, fallback),
        }
    }
}

/// Normalizes every entry of a decoded forecast.
///
/// The list is passed through in provider order. Out-of-order entries are logged,
/// not reordered.
pub fn decode_forecast(raw: RawForecast, fallback: &Condition) -> Vec<ForecastSample> {
    if !raw.list.is_sorted_by_key(|item| item.dt) {
        warn!(count = raw.list.len(), "Forecast list is not sorted by timestamp");
    }

    raw.list
        .into_iter()
        .map(|item| item.into_sample(fallback))
        .collect()
}

/// Decodes a provider forecast response into normalized samples.
///
/// # Errors
///
/// Returns an error if the bytes are not a valid forecast document.
pub fn parse_forecast(bytes: &[u8], fallback: &Condition) -> Result<Vec<ForecastSample>> {
    let raw: RawForecast =
        serde_json::from_slice(bytes).context("Failed to decode forecast response")?;
    let samples = decode_forecast(raw, fallback);
    debug!(samples = samples.len(), "Forecast decoded");
    Ok(samples)
}

/// Decodes a provider current-weather response.
///
/// # Errors
///
/// Returns an error if the bytes are not a valid current-weather document.
pub fn parse_current(bytes: &[u8], fallback: &Condition) -> Result<(CurrentConditions, Location)> {
    let raw: RawCurrent =
        serde_json::from_slice(bytes).context("Failed to decode current weather response")?;

    let condition = first_condition(&raw.weather, fallback);
    let description = raw
        .weather
        .first()
        .map(|w| w.description.clone())
        .unwrap_or_default();

    let location = Location {
        name: raw.name,
        country: raw.sys.country,
        lat: raw.coord.lat,
        lon: raw.coord.lon,
    };

    let current = CurrentConditions {
        timestamp: raw.dt,
        temperature: raw.main.temp,
        feels_like: raw.main.feels_like,
        humidity: raw.main.humidity,
        pressure: raw.main.pressure,
        wind_speed: raw.wind.speed,
        wind_direction: raw.wind.deg,
        visibility: raw.visibility,
        cloudiness: raw.clouds.all,
        description,
        condition_code: condition.code,
        condition_label: condition.label,
        sunrise: raw.sys.sunrise,
        sunset: raw.sys.sunset,
    };

    debug!(location = %location.name, "Current conditions decoded");
    Ok((current, location))
}
