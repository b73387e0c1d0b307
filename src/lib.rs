//! statuscheck: record availability snapshots into a JSON time series.
//!
//! One run performs a single load → collect → merge → write cycle against
//! the store file. The `uptime_report` binary reads the same file and
//! prints uptime summaries without ever writing.

pub mod clock;
pub mod config;
pub mod error;
pub mod merge;
pub mod persistence;
pub mod pipeline;
pub mod source;
pub mod store;
pub mod summary;
