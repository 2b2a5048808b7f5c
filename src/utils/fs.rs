//! Filesystem helpers shared by the configuration layer and the pipeline.

use std::fs::{self, File};
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::info;

use crate::errors::SummarizationError;

/// Read a YAML file into a typed value.
pub fn read_yaml<T: DeserializeOwned>(path: &Path) -> Result<T, SummarizationError> {
    let raw = fs::read_to_string(path).map_err(|e| {
        SummarizationError::Config(format!("failed to read {}: {e}", path.display()))
    })?;
    serde_yaml::from_str(&raw).map_err(|e| {
        SummarizationError::Config(format!("failed to parse {}: {e}", path.display()))
    })
}

/// Create a directory (and parents) if it does not already exist.
pub fn ensure_dir(path: &Path) -> Result<(), SummarizationError> {
    if !path.exists() {
        fs::create_dir_all(path)?;
        info!("Created directory: {}", path.display());
    }
    Ok(())
}

/// Read a JSON Lines file into typed records. Blank lines are skipped.
pub fn read_jsonl<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, SummarizationError> {
    let file = File::open(path).map_err(|e| {
        SummarizationError::Io(format!("failed to open {}: {e}", path.display()))
    })?;
    let mut records = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        records.push(serde_json::from_str(&line)?);
    }
    Ok(records)
}

/// Write records as a JSON Lines file, one record per line.
pub fn write_jsonl<T: Serialize>(path: &Path, records: &[T]) -> Result<(), SummarizationError> {
    let mut file = File::create(path).map_err(|e| {
        SummarizationError::Io(format!("failed to create {}: {e}", path.display()))
    })?;
    for record in records {
        let line = serde_json::to_string(record)?;
        writeln!(file, "{line}")?;
    }
    Ok(())
}
