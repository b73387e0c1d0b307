//! Wall-clock access and the minute-resolution timestamp format.

use chrono::{DateTime, NaiveDateTime, TimeDelta, Utc};

/// Key format of the time series: `2024-01-01T12:34Z`.
const MINUTE_FORMAT: &str = "%Y-%m-%dT%H:%MZ";

/// Source of "now". Injected into the pipeline so tests can pin the clock.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Production clock: reads the system wall clock.
#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always returns the instant it was built with.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Format an instant down to minute resolution. Seconds are dropped, not
/// rounded.
pub fn format_minute(instant: DateTime<Utc>) -> String {
    instant.format(MINUTE_FORMAT).to_string()
}

/// Parse a minute-resolution key back into an instant.
pub fn parse_minute(timestamp: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(timestamp, MINUTE_FORMAT)
        .ok()
        .map(|naive| naive.and_utc())
}

/// Signed gap between two minute-resolution timestamps (`later - earlier`).
/// `None` if either side does not parse.
pub fn difference(earlier: &str, later: &str) -> Option<TimeDelta> {
    Some(parse_minute(later)? - parse_minute(earlier)?)
}
