//! Merge: fold one snapshot into the store under a single timestamp key.

use crate::store::{StatusSnapshot, StatusStore};

/// Record every (name, status) pair of `snapshot` under `timestamp`.
///
/// Entities already in the store gain (or overwrite) the entry at that
/// exact timestamp; unknown entities start a new single-entry series.
/// Everything else in the store is left untouched.
pub fn merge(mut store: StatusStore, snapshot: &StatusSnapshot, timestamp: &str) -> StatusStore {
    for (name, status) in snapshot {
        store
            .entities
            .entry(name.clone())
            .or_default()
            .insert(timestamp.to_string(), status.clone());
    }
    store
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot_of(pairs: &[(&str, &str)]) -> StatusSnapshot {
        pairs
            .iter()
            .map(|(name, status)| (name.to_string(), status.to_string()))
            .collect()
    }

    fn store_from_json(json: &str) -> StatusStore {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn first_snapshot_into_empty_store() {
        let store = StatusStore::new();
        let snapshot = snapshot_of(&[("foo", "available")]);

        let merged = merge(store, &snapshot, "2024-01-01T00:00Z");

        let expected = store_from_json(r#"{"foo":{"2024-01-01T00:00Z":"available"}}"#);
        assert_eq!(merged, expected);
    }

    #[test]
    fn extends_known_series_and_starts_new_ones() {
        let store = store_from_json(r#"{"foo":{"2024-01-01T00:00Z":"available"}}"#);
        let snapshot = snapshot_of(&[("foo", "down"), ("bar", "available")]);

        let merged = merge(store, &snapshot, "2024-01-01T00:01Z");

        let expected = store_from_json(
            r#"{
                "foo": {"2024-01-01T00:00Z": "available", "2024-01-01T00:01Z": "down"},
                "bar": {"2024-01-01T00:01Z": "available"}
            }"#,
        );
        assert_eq!(merged, expected);
    }

    #[test]
    fn same_timestamp_overwrites_instead_of_duplicating() {
        let store = StatusStore::new();
        let merged = merge(store, &snapshot_of(&[("foo", "available")]), "2024-01-01T00:00Z");
        let merged = merge(merged, &snapshot_of(&[("foo", "down")]), "2024-01-01T00:00Z");

        let series = merged.series("foo").unwrap();
        assert_eq!(series.len(), 1);
        assert_eq!(series.get("2024-01-01T00:00Z").map(String::as_str), Some("down"));
    }

    #[test]
    fn merge_is_idempotent_within_one_timestamp() {
        let store = store_from_json(r#"{"foo":{"2024-01-01T00:00Z":"available"}}"#);
        let snapshot = snapshot_of(&[("foo", "down"), ("bar", "available")]);

        let once = merge(store.clone(), &snapshot, "2024-01-01T00:01Z");
        let twice = merge(once.clone(), &snapshot, "2024-01-01T00:01Z");

        assert_eq!(once, twice);
    }

    #[test]
    fn untouched_entities_and_timestamps_are_preserved() {
        let store = store_from_json(
            r#"{
                "foo": {"2024-01-01T00:00Z": "available", "2024-01-01T00:05Z": "down"},
                "baz": {"2023-12-31T23:55Z": "available"}
            }"#,
        );

        let merged = merge(store, &snapshot_of(&[("foo", "available")]), "2024-01-01T00:10Z");

        // baz was not in the snapshot: its series is exactly as loaded.
        assert_eq!(
            merged.series("baz"),
            store_from_json(r#"{"baz":{"2023-12-31T23:55Z":"available"}}"#).series("baz")
        );
        // foo keeps its history and gains one entry.
        let foo = merged.series("foo").unwrap();
        assert_eq!(foo.len(), 3);
        assert_eq!(foo.get("2024-01-01T00:05Z").map(String::as_str), Some("down"));
    }

    #[test]
    fn empty_snapshot_is_a_no_op() {
        let store = store_from_json(r#"{"foo":{"2024-01-01T00:00Z":"available"}}"#);
        let merged = merge(store.clone(), &StatusSnapshot::new(), "2024-01-01T00:01Z");
        assert_eq!(merged, store);
    }
}
