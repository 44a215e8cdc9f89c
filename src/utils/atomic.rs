//! Atomic file writes
//!
//! Every durable write in this crate goes through `atomic_write`:
//!
//! 1. Write the full payload to a sibling `.tmp` file
//! 2. `sync_all()` to flush it to disk
//! 3. Rename the temp file over the final path (atomic on most filesystems)
//!
//! A crash therefore leaves either the old file or the new file on disk,
//! never a truncated mix of the two.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;

/// Atomically replace the file at `path` with `payload`.
pub fn atomic_write<P: AsRef<Path>>(path: P, payload: &[u8]) -> io::Result<()> {
    let path = path.as_ref();
    let temp_path = path.with_extension("tmp");

    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut file = File::create(&temp_path)?;
    file.write_all(payload)?;

    // Flush to disk before the rename makes the write visible
    file.sync_all()?;

    fs::rename(&temp_path, path)?;

    Ok(())
}

/// Remove a stale `.tmp` sibling left behind by an interrupted write.
///
/// Called when a store file is opened; returns whether a leftover existed.
pub fn remove_stale_temp<P: AsRef<Path>>(path: P) -> io::Result<bool> {
    let temp_path = path.as_ref().with_extension("tmp");

    if temp_path.exists() {
        fs::remove_file(&temp_path)?;
        return Ok(true);
    }

    Ok(false)
}
