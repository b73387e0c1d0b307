//! The single check cycle: load, collect, merge, persist.

use std::path::Path;

use tracing::{debug, info};

use crate::clock::{format_minute, Clock};
use crate::error::StoreError;
use crate::merge::merge;
use crate::persistence::{load_store, write_store};
use crate::source::StatusSource;

/// Run exactly one load → fetch → merge → write cycle against `store_path`.
///
/// The file is only touched once the merged store is fully built; any
/// earlier failure leaves it as it was.
pub fn run(
    store_path: &Path,
    clock: &dyn Clock,
    source: &dyn StatusSource,
) -> Result<(), StoreError> {
    let store = load_store(store_path)?;
    info!(
        "loaded store with {} entities from {}",
        store.entities.len(),
        store_path.display()
    );

    let snapshot = source.fetch();
    let timestamp = format_minute(clock.now());
    for (name, status) in &snapshot {
        debug!("{} @ {}: {}", name, timestamp, status);
    }

    let merged = merge(store, &snapshot, &timestamp);
    write_store(&merged, store_path)?;
    info!("recorded {} statuses at {}", snapshot.len(), timestamp);

    Ok(())
}
