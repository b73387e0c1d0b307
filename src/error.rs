//! Error types for the load → merge → write cycle.
//!
//! Every variant is fatal: the run aborts on the first error and the store
//! file is left exactly as it was.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// The data file does not exist at load time.
    #[error("data file not found: {0}")]
    NotFound(PathBuf),

    /// The data file exists but cannot be read (permissions etc.).
    #[error("failed to read data file: {0}")]
    Read(io::Error),

    /// The data file's content is not valid JSON, or not an object mapping
    /// entity names to time series.
    #[error("data file is not a valid status store: {0}")]
    Parse(#[from] serde_json::Error),

    /// The merged store could not be written back.
    #[error("failed to write data file: {0}")]
    Write(io::Error),
}
