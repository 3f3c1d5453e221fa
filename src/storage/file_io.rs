//! JSON file I/O with atomic writes
//!
//! Data files under the app directory go through these helpers. Writes go
//! to a temp file in the same directory, get synced, then rename over the
//! target, so a crash mid-write leaves the previous contents intact.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::{SpendDashError, SpendDashResult};

/// Read JSON from a file that must exist
///
/// Parse failures surface as errors; the caller decides whether corruption
/// is fatal (the rule store degrades to defaults instead).
pub fn read_json_required<T, P>(path: P) -> SpendDashResult<T>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if !path.exists() {
        return Err(SpendDashError::Storage(format!(
            "File not found: {}",
            path.display()
        )));
    }
    let file = File::open(path).map_err(|e| {
        SpendDashError::Storage(format!("Failed to open {}: {}", path.display(), e))
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|e| {
        SpendDashError::Storage(format!("Failed to parse {}: {}", path.display(), e))
    })
}

/// Write JSON to a file atomically (temp file, sync, rename)
pub fn write_json_atomic<T, P>(path: P, data: &T) -> SpendDashResult<()>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            SpendDashError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Temp file must live in the same directory for the rename to be atomic
    let temp_path = path.with_extension("json.tmp");

    let file = File::create(&temp_path)
        .map_err(|e| SpendDashError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, data)
        .map_err(|e| SpendDashError::Storage(format!("Failed to serialize data: {}", e)))?;

    writer
        .flush()
        .map_err(|e| SpendDashError::Storage(format!("Failed to flush data: {}", e)))?;

    writer
        .get_ref()
        .sync_all()
        .map_err(|e| SpendDashError::Storage(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        SpendDashError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}
