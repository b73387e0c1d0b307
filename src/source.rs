//! Snapshot collection: where fresh statuses come from.

use crate::store::StatusSnapshot;

/// Anything that can report the current status of a set of entities.
///
/// A real deployment would poll live services behind this trait; the
/// shipped source is a fixed table so a check run stays deterministic.
pub trait StatusSource {
    fn fetch(&self) -> StatusSnapshot;
}

/// Fixed status table.
#[derive(Debug, Clone)]
pub struct StaticStatusSource {
    entries: StatusSnapshot,
}

impl StaticStatusSource {
    pub fn new(entries: StatusSnapshot) -> Self {
        Self { entries }
    }
}

impl Default for StaticStatusSource {
    /// The two built-in entities, both reporting available.
    fn default() -> Self {
        let mut entries = StatusSnapshot::new();
        entries.insert("foo".to_string(), "available".to_string());
        entries.insert("bar".to_string(), "available".to_string());
        Self { entries }
    }
}

impl StatusSource for StaticStatusSource {
    fn fetch(&self) -> StatusSnapshot {
        self.entries.clone()
    }
}
