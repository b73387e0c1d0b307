//! Store types: the persisted availability history and the per-run snapshot.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One entity's availability history, keyed by minute-resolution UTC
/// timestamp (`2024-01-01T12:34Z`).
pub type TimeSeries = BTreeMap<String, String>;

/// One run's fresh entity → status readings. Built, merged, discarded;
/// never persisted on its own.
pub type StatusSnapshot = BTreeMap<String, String>;

/// The persisted store: entity name → time series.
///
/// Serializes as a bare JSON object, exactly the shape found in `data.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatusStore {
    pub entities: BTreeMap<String, TimeSeries>,
}

impl StatusStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded series for one entity, if any runs have seen it.
    pub fn series(&self, name: &str) -> Option<&TimeSeries> {
        self.entities.get(name)
    }
}
