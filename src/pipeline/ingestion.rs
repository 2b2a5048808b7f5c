//! Stage 1: dataset ingestion.
//!
//! Downloads the dialogue/summary dataset from the configured source URL,
//! persists it under the ingestion root, and validates that it parses.

use std::fs;

use tracing::info;

use crate::core::config::DataIngestionConfig;
use crate::core::models::DialogueRecord;
use crate::errors::SummarizationError;
use crate::utils::fs::{ensure_dir, read_jsonl};

pub struct DataIngestion {
    config: DataIngestionConfig,
}

impl DataIngestion {
    pub fn new(config: DataIngestionConfig) -> Self {
        Self { config }
    }

    /// Download and validate the dataset. Returns the record count.
    pub async fn run(&self) -> Result<usize, SummarizationError> {
        info!("Downloading dataset from: {}", self.config.source_url);
        let response = reqwest::Client::new()
            .get(&self.config.source_url)
            .send()
            .await?
            .error_for_status()?;
        let body = response.bytes().await?;

        if let Some(parent) = self.config.local_data_file.parent() {
            ensure_dir(parent)?;
        }
        fs::write(&self.config.local_data_file, &body)?;

        let records: Vec<DialogueRecord> = read_jsonl(&self.config.local_data_file)?;
        if records.is_empty() {
            return Err(SummarizationError::Dataset(
                "downloaded dataset contains no records".to_string(),
            ));
        }

        info!(
            "Stored {} records at: {}",
            records.len(),
            self.config.local_data_file.display()
        );
        Ok(records.len())
    }
}
