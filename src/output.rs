//! Output formatting and persistence for derived forecast views.
//!
//! Supports pretty-printing, JSON serialization, and CSV export.

use anyhow::Result;
use serde::Serialize;
use tracing::{debug, info};

use crate::report::WeatherReport;
use csv::WriterBuilder;
use std::fs::File;

/// Logs a report using Rust's debug pretty-print format.
pub fn print_pretty(report: &WeatherReport) {
    debug!("{:#?}", report);
}

/// Logs a report as pretty-printed JSON.
pub fn print_json(report: &WeatherReport) -> Result<()> {
    info!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

/// Renders a report as pretty-printed JSON.
pub fn to_json(report: &WeatherReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Writes `records` as CSV rows to `path`, replacing any existing file.
///
/// The header is emitted with the first row, so an empty slice leaves an empty file.
pub fn write_records<T: Serialize>(path: &str, records: &[T]) -> Result<()> {
    debug!(path, rows = records.len(), "Writing CSV records");

    let file = File::create(path)?;
    let mut writer = WriterBuilder::new().has_headers(true).from_writer(file);

    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::{Condition, ForecastSample, aggregate_daily, interpolate_hourly};
    use std::env;
    use std::fs;
    use std::path::Path;

    fn temp_path(name: &str) -> String {
        format!("{}/{}", env::temp_dir().display(), name)
    }

    fn samples() -> Vec<ForecastSample> {
        (0..4)
            .map(|i| ForecastSample {
                timestamp: i * 10_800,
                temperature: i as f64,
                humidity: 55.0,
                precipitation_probability: 0.1,
                condition: Condition::default(),
            })
            .collect()
    }

    #[test]
    fn test_print_pretty_does_not_panic() {
        let report = WeatherReport::from_samples(&samples(), 3, 0);
        print_pretty(&report);
    }

    #[test]
    fn test_print_json_does_not_panic() {
        let report = WeatherReport::from_samples(&samples(), 3, 0);
        print_json(&report).unwrap();
    }

    #[test]
    fn test_to_json_contains_series() {
        let report = WeatherReport::from_samples(&samples(), 3, 0);
        let json = to_json(&report).unwrap();

        assert!(json.contains("\"hourly\""));
        assert!(json.contains("\"daily\""));
    }

    #[test]
    fn test_write_hourly_csv() {
        let path = temp_path("forecast_shaper_test_hourly.csv");
        let _ = fs::remove_file(&path);

        let hourly = interpolate_hourly(&samples(), 5, 0);
        write_records(&path, &hourly).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(lines.len(), 6);
        assert!(lines[0].starts_with("timestamp,temperature,precipitation_probability"));

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_write_daily_csv_replaces_previous_file() {
        let path = temp_path("forecast_shaper_test_daily.csv");
        let _ = fs::remove_file(&path);

        let daily = aggregate_daily(&samples());
        write_records(&path, &daily).unwrap();
        write_records(&path, &daily).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let header_count = content.lines().filter(|l| l.starts_with("day_key")).count();
        assert_eq!(header_count, 1);
        assert!(content.contains("1970-01-01"));

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_write_empty_records() {
        let path = temp_path("forecast_shaper_test_empty.csv");
        let _ = fs::remove_file(&path);

        let hourly = interpolate_hourly(&[], 5, 0);
        write_records(&path, &hourly).unwrap();

        assert!(Path::new(&path).exists());
        assert!(fs::read_to_string(&path).unwrap().is_empty());

        fs::remove_file(&path).unwrap();
    }
}
