//! Statistics aggregate
//!
//! Tracks every input string the service has seen: per-input occurrence
//! counts, the most popular input, and the longest input by codepoint count.
//! One `RwLock` guards all of it, so each `record` is observed as a single
//! atomic update and `snapshot` always returns a consistent view.
//!
//! Persistence lives in the `persist` submodule; the aggregate itself is
//! purely in-memory and none of its operations can fail.

mod persist;

pub use persist::{StatsPersister, STATS_BUCKET, STATS_KEY};

use std::collections::HashMap;
use std::sync::RwLock;

use crate::types::StatsReport;

#[derive(Debug, Default)]
struct AggregateState {
    counts: HashMap<String, u64>,
    most_popular: String,
    longest: String,
    longest_chars: usize,
}

/// Lock-guarded usage statistics for the whole process
pub struct StatsAggregate {
    state: RwLock<AggregateState>,
}

impl StatsAggregate {
    /// Create an empty aggregate
    pub fn new() -> Self {
        Self {
            state: RwLock::new(AggregateState::default()),
        }
    }

    /// Count one occurrence of `input` and update the leaders.
    ///
    /// A leader is displaced only by a strictly greater count (or codepoint
    /// length), so the first input to reach a value keeps the title against
    /// later inputs that merely equal it.
    pub fn record(&self, input: &str) {
        let mut state = self.state.write().unwrap();

        let count = {
            let entry = state.counts.entry(input.to_string()).or_insert(0);
            *entry += 1;
            *entry
        };

        let leader_count = state
            .counts
            .get(state.most_popular.as_str())
            .copied()
            .unwrap_or(0);
        if count > leader_count {
            state.most_popular = input.to_string();
        }

        let input_chars = input.chars().count();
        if input_chars > state.longest_chars {
            state.longest = input.to_string();
            state.longest_chars = input_chars;
        }
    }

    /// Consistent view of all statistics at one point in time
    pub fn snapshot(&self) -> StatsReport {
        let state = self.state.read().unwrap();
        StatsReport {
            inputs: state.counts.clone(),
            most_popular: state.most_popular.clone(),
            longest_input: state.longest.clone(),
            longest_input_len: state.longest_chars,
        }
    }

    /// Wipe all statistics back to the empty state
    pub fn reset(&self) {
        let mut state = self.state.write().unwrap();
        *state = AggregateState::default();
    }

    /// Clone of the raw counts map, for persistence
    pub(crate) fn counts(&self) -> HashMap<String, u64> {
        self.state.read().unwrap().counts.clone()
    }

    /// Replace the counts map wholesale.
    ///
    /// The leader fields are left untouched: the persisted snapshot stores
    /// counts only, and no recovery of most-popular/longest is attempted.
    pub(crate) fn hydrate(&self, counts: HashMap<String, u64>) {
        let mut state = self.state.write().unwrap();
        state.counts = counts;
    }
}

impl Default for StatsAggregate {
    fn default() -> Self {
        Self::new()
    }
}
