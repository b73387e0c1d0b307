use std::fs;
use std::path::PathBuf;

use chrono::{TimeZone, Utc};
use statuscheck::clock::FixedClock;
use statuscheck::source::StaticStatusSource;
use statuscheck::store::StatusSnapshot;
use tempfile::TempDir;

/// Write `content` as `data.json` inside a fresh temp dir.
/// Keep the TempDir alive for the duration of the test.
pub fn setup_data_file(content: &str) -> (PathBuf, TempDir) {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("data.json");
    fs::write(&path, content).unwrap();
    (path, temp_dir)
}

/// A temp-dir path for a data file that does not exist yet.
pub fn missing_data_file() -> (PathBuf, TempDir) {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("data.json");
    (path, temp_dir)
}

pub fn clock_at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> FixedClock {
    FixedClock(Utc.with_ymd_and_hms(year, month, day, hour, minute, 0).unwrap())
}

pub fn source_of(pairs: &[(&str, &str)]) -> StaticStatusSource {
    let mut entries = StatusSnapshot::new();
    for (name, status) in pairs {
        entries.insert(name.to_string(), status.to_string());
    }
    StaticStatusSource::new(entries)
}
