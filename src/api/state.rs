//! Shared application state

use std::sync::Arc;

use crate::stats::{StatsAggregate, StatsPersister};
use crate::store::KvStore;

/// State shared by all request handlers
pub struct AppState {
    /// In-memory usage statistics
    pub aggregate: StatsAggregate,

    persister: StatsPersister,
}

impl AppState {
    /// Build the state around an open store, hydrating the aggregate from
    /// any statistics persisted by a previous run.
    pub fn new(store: Arc<KvStore>) -> Self {
        let aggregate = StatsAggregate::new();
        let persister = StatsPersister::new(store);
        persister.load(&aggregate);

        Self {
            aggregate,
            persister,
        }
    }

    /// Record `input` in the aggregate, then make the mutation durable.
    ///
    /// A persistence failure is logged and swallowed; the in-memory
    /// aggregate stays the source of truth for this process, and the next
    /// successful save rewrites the whole snapshot anyway.
    pub fn record_input(&self, input: &str) {
        self.aggregate.record(input);

        if let Err(e) = self.persister.save(&self.aggregate) {
            eprintln!("[Stats] Failed to persist statistics: {}", e);
        }
    }

    /// Wipe the aggregate and drop the persisted snapshot.
    pub fn reset_all(&self) {
        self.aggregate.reset();

        if let Err(e) = self.persister.clear() {
            eprintln!("[Stats] Failed to clear persisted statistics: {}", e);
        }
    }
}
