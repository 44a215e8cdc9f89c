//! Durable key-value store
//!
//! A small file-backed store with named buckets. The full bucket map is
//! cached in memory and rewritten to disk on every mutation, so each
//! `put`/`reset_bucket` call is its own transaction: the on-disk file always
//! holds a complete, parseable document (see `utils::atomic`).
//!
//! Values are opaque byte blobs; callers decide what they encode.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::utils::atomic::{atomic_write, remove_stale_temp};

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur while opening or writing the store
#[derive(Debug)]
pub enum StoreError {
    Io(std::io::Error),
    Corrupt(serde_json::Error),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Io(e) => write!(f, "IO error: {}", e),
            StoreError::Corrupt(e) => write!(f, "store file corrupt: {}", e),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> Self {
        StoreError::Io(e)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Corrupt(e)
    }
}

/// bucket name -> key -> value bytes
type Buckets = HashMap<String, HashMap<String, Vec<u8>>>;

/// File-backed key-value store with named buckets
pub struct KvStore {
    path: PathBuf,
    buckets: Mutex<Buckets>,
}

impl KvStore {
    /// Open the store at `path`, loading any existing contents.
    ///
    /// A missing file yields an empty store; an unreadable or unparseable
    /// file is an error, since silently discarding it would lose data.
    pub fn open<P: AsRef<Path>>(path: P) -> StoreResult<Self> {
        let path = path.as_ref().to_path_buf();

        if remove_stale_temp(&path)? {
            eprintln!(
                "[Store] Removed stale temp file next to {}",
                path.display()
            );
        }

        let buckets = if path.exists() {
            let bytes = fs::read(&path)?;
            serde_json::from_slice(&bytes)?
        } else {
            Buckets::new()
        };

        Ok(Self {
            path,
            buckets: Mutex::new(buckets),
        })
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the value stored under `bucket`/`key`, if any.
    pub fn get(&self, bucket: &str, key: &str) -> Option<Vec<u8>> {
        let buckets = self.buckets.lock().unwrap();
        buckets.get(bucket).and_then(|b| b.get(key)).cloned()
    }

    /// Write `value` under `bucket`/`key`, overwriting any prior value,
    /// and commit the store file to disk.
    pub fn put(&self, bucket: &str, key: &str, value: Vec<u8>) -> StoreResult<()> {
        let mut buckets = self.buckets.lock().unwrap();
        buckets
            .entry(bucket.to_string())
            .or_default()
            .insert(key.to_string(), value);
        self.flush(&buckets)
    }

    /// Drop the named bucket and recreate it empty, committing to disk.
    pub fn reset_bucket(&self, bucket: &str) -> StoreResult<()> {
        let mut buckets = self.buckets.lock().unwrap();
        buckets.insert(bucket.to_string(), HashMap::new());
        self.flush(&buckets)
    }

    /// Serialize the bucket map and atomically replace the store file.
    /// Callers hold the bucket lock, so writes are serialized.
    fn flush(&self, buckets: &Buckets) -> StoreResult<()> {
        let bytes = serde_json::to_vec(buckets)?;
        atomic_write(&self.path, &bytes)?;
        Ok(())
    }
}
