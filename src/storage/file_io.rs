//! File I/O utilities with atomic writes
//!
//! Provides safe file operations that won't corrupt data on failure. Every
//! write goes to a sibling temp file which is renamed over the target only
//! after it has been fully written and synced.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};

use crate::error::TrackerError;

/// Read JSON from a file, returning a default value if file doesn't exist
pub fn read_json<T, P>(path: P) -> Result<T, TrackerError>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        tracing::debug!(path = %path.display(), "file missing, using empty default");
        return Ok(T::default());
    }

    let file = File::open(path)
        .map_err(|e| TrackerError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    let reader = BufReader::new(file);
    serde_json::from_reader(reader)
        .map_err(|e| TrackerError::Storage(format!("Failed to parse {}: {}", path.display(), e)))
}

/// Write JSON to a file atomically (write to temp, then rename)
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), TrackerError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    write_atomic(path.as_ref(), |writer| {
        serde_json::to_writer_pretty(writer, data)
            .map_err(|e| TrackerError::Storage(format!("Failed to serialize data: {}", e)))
    })
}

/// Read every record of a headed CSV file, returning an empty list if the
/// file doesn't exist
///
/// A single malformed record fails the whole read.
pub fn read_csv<T, P>(path: P) -> Result<Vec<T>, TrackerError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        tracing::debug!(path = %path.display(), "file missing, using empty default");
        return Ok(Vec::new());
    }

    let mut reader = csv::Reader::from_path(path)
        .map_err(|e| TrackerError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    let mut records = Vec::new();
    for (index, result) in reader.deserialize().enumerate() {
        let record: T = result.map_err(|e| {
            TrackerError::Storage(format!(
                "Failed to parse {} at record {}: {}",
                path.display(),
                index + 1,
                e
            ))
        })?;
        records.push(record);
    }

    Ok(records)
}

/// Write a headed CSV file atomically
///
/// The header row is always written, so an empty slice still produces a
/// valid file.
pub fn write_csv_atomic<T, P>(path: P, headers: &[&str], records: &[T]) -> Result<(), TrackerError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    write_atomic(path.as_ref(), |writer| {
        let mut csv_writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(writer);

        csv_writer
            .write_record(headers)
            .map_err(|e| TrackerError::Storage(format!("Failed to write header: {}", e)))?;

        for record in records {
            csv_writer
                .serialize(record)
                .map_err(|e| TrackerError::Storage(format!("Failed to serialize data: {}", e)))?;
        }

        csv_writer
            .flush()
            .map_err(|e| TrackerError::Storage(format!("Failed to flush data: {}", e)))
    })
}

/// Temp file used while writing `path`: `transactions.csv` -> `transactions.csv.tmp`
pub fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

fn write_atomic<F>(path: &Path, write_body: F) -> Result<(), TrackerError>
where
    F: FnOnce(&mut BufWriter<File>) -> Result<(), TrackerError>,
{
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            TrackerError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Same directory as the target so the rename stays atomic
    let temp_path = temp_path_for(path);

    let file = File::create(&temp_path)
        .map_err(|e| TrackerError::Storage(format!("Failed to create temp file: {}", e)))?;
    let mut writer = BufWriter::new(file);

    let result = write_body(&mut writer)
        .and_then(|_| {
            writer
                .flush()
                .map_err(|e| TrackerError::Storage(format!("Failed to flush data: {}", e)))
        })
        .and_then(|_| {
            writer
                .get_ref()
                .sync_all()
                .map_err(|e| TrackerError::Storage(format!("Failed to sync data: {}", e)))
        });

    if let Err(e) = result {
        drop(writer);
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }
    drop(writer);

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        TrackerError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    tracing::debug!(path = %path.display(), "wrote file");
    Ok(())
}
