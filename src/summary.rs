//! Read-side uptime accounting over a recorded time series.
//!
//! Nothing here mutates or persists anything; the report binary is the
//! only consumer.

use std::collections::{BTreeMap, BTreeSet};

use chrono::TimeDelta;

use crate::clock::difference;
use crate::store::TimeSeries;

/// Status value that counts toward uptime. Anything else is downtime.
pub const AVAILABLE: &str = "available";

/// Gap from each measurement to the next one, in timestamp order.
///
/// The last measurement has no successor and therefore no length.
/// Timestamps that fail to parse contribute nothing.
pub fn measurement_lengths(series: &TimeSeries) -> BTreeMap<String, TimeDelta> {
    let timestamps: Vec<&String> = series.keys().collect();
    let mut lengths = BTreeMap::new();
    for pair in timestamps.windows(2) {
        if let Some(delta) = difference(pair[0], pair[1]) {
            lengths.insert(pair[0].clone(), delta);
        }
    }
    lengths
}

/// Total time spent available under a timestamp prefix.
///
/// The prefix is an ISO-8601 datetime at lower precision than the series
/// keys: a date (`2024-01-01`) covers the day, an hour (`2024-01-01T12`)
/// covers the hour. Hour-precision ISO datetimes are perfectly valid, just
/// unusual.
pub fn uptime(
    series: &TimeSeries,
    lengths: &BTreeMap<String, TimeDelta>,
    prefix: &str,
) -> TimeDelta {
    series
        .iter()
        .filter(|(timestamp, _)| timestamp.starts_with(prefix))
        .filter(|(_, status)| status.as_str() == AVAILABLE)
        .filter_map(|(timestamp, _)| lengths.get(timestamp))
        .fold(TimeDelta::zero(), |acc, delta| acc + *delta)
}

/// Uptime ratio (0.0 ..= 1.0) for every hour prefix present in the series.
pub fn hourly_uptime(series: &TimeSeries) -> BTreeMap<String, f64> {
    uptime_by_prefix(series, hour_prefix, TimeDelta::hours(1))
}

/// Uptime ratio for every date prefix present in the series.
pub fn daily_uptime(series: &TimeSeries) -> BTreeMap<String, f64> {
    uptime_by_prefix(series, date_prefix, TimeDelta::days(1))
}

fn uptime_by_prefix(
    series: &TimeSeries,
    prefix_of: fn(&str) -> &str,
    span: TimeDelta,
) -> BTreeMap<String, f64> {
    let lengths = measurement_lengths(series);
    let prefixes: BTreeSet<&str> = series.keys().map(|ts| prefix_of(ts)).collect();

    prefixes
        .into_iter()
        .map(|prefix| {
            let up = uptime(series, &lengths, prefix);
            let ratio = up.num_milliseconds() as f64 / span.num_milliseconds() as f64;
            (prefix.to_string(), ratio)
        })
        .collect()
}

/// `2024-01-01T12:34Z` → `2024-01-01T12`.
fn hour_prefix(timestamp: &str) -> &str {
    timestamp.split(':').next().unwrap_or(timestamp)
}

/// `2024-01-01T12:34Z` → `2024-01-01`.
fn date_prefix(timestamp: &str) -> &str {
    timestamp.split('T').next().unwrap_or(timestamp)
}
