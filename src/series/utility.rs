use chrono::{DateTime, NaiveDate};

/// Linear blend between `start` and `end` by `factor`.
pub fn lerp(start: f64, end: f64, factor: f64) -> f64 {
    start + (end - start) * factor
}

/// Value at `target` on the line through `(t1, v1)` and `(t2, v2)`.
/// Returns `v1` unchanged when both points share a timestamp.
///
/// Offsets are taken in `i128` so timestamps at opposite ends of the `i64` range
/// cannot overflow.
pub fn interpolate_value(t1: i64, v1: f64, t2: i64, v2: f64, target: i64) -> f64 {
    if t1 == t2 {
        return v1;
    }
    let span = i128::from(t2) - i128::from(t1);
    let offset = i128::from(target) - i128::from(t1);
    lerp(v1, v2, offset as f64 / span as f64)
}

/// UTC calendar date of an epoch-seconds timestamp, `None` when chrono cannot represent it.
pub fn day_key(timestamp: i64) -> Option<NaiveDate> {
    DateTime::from_timestamp(timestamp, 0).map(|dt| dt.date_naive())
}
