//! String Stats Server
//!
//! An HTTP service that analyzes strings and keeps durable aggregate usage
//! statistics.
//!
//! # Features
//!
//! - **Per-string analysis**: byte length and most-frequent-character reports
//! - **Case transformations**: uppercase, lowercase, titlecase
//! - **Aggregate statistics**: per-input counts, most popular input, longest input
//! - **Thread-safe**: one reader/writer lock guards the whole aggregate
//! - **Durable**: every mutation is written through to a single-file store
//!
//! # Modules
//!
//! - `analyze`: pure text analysis (character frequency, transformations)
//! - `stats`: the statistics aggregate and its persistence synchronizer
//! - `store`: file-backed key-value store with named buckets
//! - `types`: shared data structures
//! - `api`: axum router, shared state, REST handlers
//! - `utils`: atomic file writes
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use string_stats::api::{http::create_router, state::AppState};
//! use string_stats::store::KvStore;
//!
//! #[tokio::main]
//! async fn main() {
//!     let store = Arc::new(KvStore::open("stats.db").unwrap());
//!     let state = Arc::new(AppState::new(store));
//!     let app = create_router(state);
//!
//!     let listener = tokio::net::TcpListener::bind("0.0.0.0:1323").await.unwrap();
//!     axum::serve(listener, app).await.unwrap();
//! }
//! ```

pub mod analyze;
pub mod api;
pub mod stats;
pub mod store;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use api::state::AppState;
pub use stats::{StatsAggregate, StatsPersister};
pub use store::{KvStore, StoreError};
pub use types::{AppResult, StatsReport};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
