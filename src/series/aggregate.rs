use crate::series::types::{DailySummary, ForecastSample};
use crate::series::utility::day_key;
use chrono::NaiveDate;
use std::collections::HashMap;
use tracing::warn;

/// Upper bound on the number of days in the outlook.
pub const MAX_DAYS: usize = 7;

/// Groups samples by UTC calendar date and reduces each day to a [`DailySummary`].
///
/// Days appear in order of first occurrence, capped at [`MAX_DAYS`]; later days are
/// dropped. Temperature extremes cover every sample of the day, while the
/// condition, precipitation and humidity stay at the day's first sample. That
/// freeze is existing behaviour downstream consumers rely on.
///
/// Samples whose timestamp has no calendar date are skipped.
pub fn aggregate_daily(samples: &[ForecastSample]) -> Vec<DailySummary> {
    let mut days: Vec<DailySummary> = Vec::new();
    let mut index: HashMap<NaiveDate, usize> = HashMap::new();

    for sample in samples {
        let Some(key) = day_key(sample.timestamp) else {
            warn!(timestamp = sample.timestamp, "Sample timestamp has no calendar date, skipping");
            continue;
        };

        match index.get(&key) {
            Some(&slot) => {
                let day = &mut days[slot];
                day.temp_max = day.temp_max.max(sample.temperature);
                day.temp_min = day.temp_min.min(sample.temperature);
            }
            None => {
                index.insert(key, days.len());
                days.push(seed_day(key, sample));
            }
        }
    }

    days.truncate(MAX_DAYS);
    days
}

fn seed_day(day_key: NaiveDate, sample: &ForecastSample) -> DailySummary {
    DailySummary {
        day_key,
        representative_timestamp: sample.timestamp,
        temp_max: sample.temperature,
        temp_min: sample.temperature,
        condition_code: sample.condition.code.clone(),
        condition_label: sample.condition.label.clone(),
        precipitation_probability: sample.precipitation_probability * 100.0,
        humidity: sample.humidity,
    }
}
