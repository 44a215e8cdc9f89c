//! Persistence synchronizer for the statistics aggregate
//!
//! Serializes the aggregate's counts map to JSON and writes it through the
//! durable store after every mutation; hydrates the aggregate back from the
//! store at startup. Only the counts map is persisted; the most-popular and
//! longest leaders are rebuilt by new traffic after a restart.

use std::collections::HashMap;
use std::sync::Arc;

use crate::store::{KvStore, StoreResult};

use super::StatsAggregate;

/// Store bucket holding aggregate statistics
pub const STATS_BUCKET: &str = "stats";

/// Key the serialized counts map is stored under
pub const STATS_KEY: &str = "statistics";

/// Writes aggregate statistics through the durable store
pub struct StatsPersister {
    store: Arc<KvStore>,
}

impl StatsPersister {
    pub fn new(store: Arc<KvStore>) -> Self {
        Self { store }
    }

    /// Hydrate `aggregate` from the persisted snapshot, if one exists.
    ///
    /// An absent snapshot leaves the aggregate empty; a malformed one is
    /// treated the same way, with a warning, rather than failing startup.
    pub fn load(&self, aggregate: &StatsAggregate) {
        let bytes = match self.store.get(STATS_BUCKET, STATS_KEY) {
            Some(bytes) => bytes,
            None => return,
        };

        match serde_json::from_slice::<HashMap<String, u64>>(&bytes) {
            Ok(counts) => aggregate.hydrate(counts),
            Err(e) => {
                eprintln!("[Stats] Ignoring unreadable persisted statistics: {}", e);
            }
        }
    }

    /// Serialize the aggregate's current counts and commit them to the store.
    pub fn save(&self, aggregate: &StatsAggregate) -> StoreResult<()> {
        let counts = aggregate.counts();
        let bytes = serde_json::to_vec(&counts)?;
        self.store.put(STATS_BUCKET, STATS_KEY, bytes)
    }

    /// Drop all persisted statistics.
    pub fn clear(&self) -> StoreResult<()> {
        self.store.reset_bucket(STATS_BUCKET)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn open_store(dir: &TempDir) -> Arc<KvStore> {
        Arc::new(KvStore::open(dir.path().join("stats.db")).unwrap())
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);
        let persister = StatsPersister::new(Arc::clone(&store));

        let aggregate = StatsAggregate::new();
        aggregate.record("x");
        aggregate.record("x");
        aggregate.record("y");
        persister.save(&aggregate).unwrap();

        // Simulated restart: fresh aggregate hydrated from the same store
        let restored = StatsAggregate::new();
        persister.load(&restored);

        let report = restored.snapshot();
        assert_eq!(report.inputs["x"], 2);
        assert_eq!(report.inputs["y"], 1);
    }

    #[test]
    fn test_load_does_not_recover_leaders() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);
        let persister = StatsPersister::new(Arc::clone(&store));

        let aggregate = StatsAggregate::new();
        aggregate.record("popular");
        persister.save(&aggregate).unwrap();

        let restored = StatsAggregate::new();
        persister.load(&restored);

        let report = restored.snapshot();
        assert_eq!(report.inputs["popular"], 1);
        assert_eq!(report.most_popular, "");
        assert_eq!(report.longest_input, "");
        assert_eq!(report.longest_input_len, 0);
    }

    #[test]
    fn test_load_with_no_snapshot_leaves_aggregate_empty() {
        let dir = TempDir::new().unwrap();
        let persister = StatsPersister::new(open_store(&dir));

        let aggregate = StatsAggregate::new();
        persister.load(&aggregate);

        assert!(aggregate.snapshot().inputs.is_empty());
    }

    #[test]
    fn test_load_ignores_malformed_snapshot() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);

        store
            .put(STATS_BUCKET, STATS_KEY, b"[not,a,map".to_vec())
            .unwrap();

        let persister = StatsPersister::new(store);
        let aggregate = StatsAggregate::new();
        persister.load(&aggregate);

        assert!(aggregate.snapshot().inputs.is_empty());
    }

    #[test]
    fn test_clear_removes_persisted_snapshot() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);
        let persister = StatsPersister::new(Arc::clone(&store));

        let aggregate = StatsAggregate::new();
        aggregate.record("x");
        persister.save(&aggregate).unwrap();
        persister.clear().unwrap();

        assert_eq!(store.get(STATS_BUCKET, STATS_KEY), None);

        let restored = StatsAggregate::new();
        persister.load(&restored);
        assert!(restored.snapshot().inputs.is_empty());
    }
}
