//! Dense hourly series from sparse provider samples.

use crate::series::types::{ForecastSample, HourlySample};
use crate::series::utility::interpolate_value;

/// Hours produced when the caller does not ask for a specific count.
pub const DEFAULT_HOURS: usize = 12;

/// Spacing between consecutive entries of the hourly series.
pub const SECONDS_PER_HOUR: i64 = 3_600;

/// Resamples `samples` onto a one-hour grid of `hours_needed` entries.
///
/// Hour 0 sits on the sample just before the first sample later than `now`, so the
/// opening hour is interpolated rather than extrapolated. When every sample is at or
/// before `now`, hour 0 is `now` itself and the last sample is held constant.
///
/// Numeric fields are linearly interpolated between the bracketing samples and
/// clamped to the boundary sample outside the data. The condition comes from the
/// bracketing sample nearest in time, preferring the earlier one on a tie.
///
/// `samples` must be sorted by timestamp; unsorted input gives unspecified output.
/// Empty input or `hours_needed == 0` yields an empty series. The series also ends
/// early, rather than repeating a timestamp, once the next hour would pass `i64::MAX`.
pub fn interpolate_hourly(
    samples: &[ForecastSample],
    hours_needed: usize,
    now: i64,
) -> Vec<HourlySample> {
    if samples.is_empty() || hours_needed == 0 {
        return Vec::new();
    }

    let (anchor, anchor_time) = match samples.iter().position(|s| s.timestamp > now) {
        Some(i) => {
            let anchor = i.saturating_sub(1);
            (anchor, samples[anchor].timestamp)
        }
        None => (samples.len() - 1, now),
    };

    let mut cursor = anchor;
    let mut hourly = Vec::with_capacity(hours_needed);

    for h in 0..hours_needed {
        let Some(target) = i64::try_from(h)
            .ok()
            .and_then(|h| h.checked_mul(SECONDS_PER_HOUR))
            .and_then(|offset| anchor_time.checked_add(offset))
        else {
            break;
        };
        let (lower, upper) = bracket(samples, anchor, &mut cursor, target);
        hourly.push(sample_at(lower, upper, target));
    }

    hourly
}

/// Finds the samples surrounding `target`, walking `cursor` forward from the anchor.
///
/// Targets only ever increase, so the cursor never has to move back.
fn bracket<'a>(
    samples: &'a [ForecastSample],
    anchor: usize,
    cursor: &mut usize,
    target: i64,
) -> (&'a ForecastSample, &'a ForecastSample) {
    let last = samples.len() - 1;

    if target < samples[anchor].timestamp {
        return (&samples[anchor], &samples[anchor]);
    }

    while *cursor < last && samples[*cursor + 1].timestamp <= target {
        *cursor += 1;
    }

    if *cursor == last {
        (&samples[last], &samples[last])
    } else {
        (&samples[*cursor], &samples[*cursor + 1])
    }
}

fn sample_at(lower: &ForecastSample, upper: &ForecastSample, target: i64) -> HourlySample {
    let blend = |lower_value: f64, upper_value: f64| {
        interpolate_value(
            lower.timestamp,
            lower_value,
            upper.timestamp,
            upper_value,
            target,
        )
    };

    let nearest = nearest_sample(lower, upper, target);

    HourlySample {
        timestamp: target,
        temperature: blend(lower.temperature, upper.temperature),
        precipitation_probability: blend(
            lower.precipitation_probability * 100.0,
            upper.precipitation_probability * 100.0,
        ),
        condition_code: nearest.condition.code.clone(),
        condition_label: nearest.condition.label.clone(),
        humidity: blend(lower.humidity, upper.humidity),
    }
}

fn nearest_sample<'a>(
    lower: &'a ForecastSample,
    upper: &'a ForecastSample,
    target: i64,
) -> &'a ForecastSample {
    let to_lower = target.abs_diff(lower.timestamp);
    let to_upper = target.abs_diff(upper.timestamp);

    if to_lower <= to_upper { lower } else { upper }
}
