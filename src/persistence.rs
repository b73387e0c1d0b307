//! Load and write the store file. Whole-file read, whole-file overwrite.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::StoreError;
use crate::store::StatusStore;

/// Read and parse the store file.
pub fn load_store(path: &Path) -> Result<StatusStore, StoreError> {
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => StoreError::NotFound(path.to_path_buf()),
        _ => StoreError::Read(e),
    })?;
    let store = serde_json::from_str(&content)?;
    Ok(store)
}

/// Serialize and overwrite the store file in full.
///
/// No temp file, no rename: a crash mid-write leaves a truncated file, and
/// concurrent invocations race with last-writer-wins.
pub fn write_store(store: &StatusStore, path: &Path) -> Result<(), StoreError> {
    let json = serde_json::to_string_pretty(store).map_err(|e| StoreError::Write(e.into()))?;
    fs::write(path, json).map_err(StoreError::Write)
}
