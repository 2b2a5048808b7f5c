//! Stage 2: dataset transformation.
//!
//! Encodes each dialogue/summary pair with the pretrained tokenizer and
//! writes one JSON Lines file of encoded records per dataset split.

use std::collections::HashMap;

use tokenizers::{Tokenizer, TruncationParams};
use tracing::info;

use crate::core::config::DataTransformationConfig;
use crate::core::models::{DialogueRecord, EncodedRecord};
use crate::errors::SummarizationError;
use crate::summarize::backend::TOKENIZER_FILE;
use crate::utils::fs::{read_jsonl, write_jsonl};

/// Split names the pipeline recognizes.
pub const SPLITS: [&str; 3] = ["train", "validation", "test"];

/// Group records by split, rejecting unknown split names rather than
/// silently dropping them.
pub fn partition_by_split(
    records: Vec<DialogueRecord>,
) -> Result<HashMap<String, Vec<DialogueRecord>>, SummarizationError> {
    let mut groups: HashMap<String, Vec<DialogueRecord>> = HashMap::new();
    for record in records {
        if !SPLITS.contains(&record.split.as_str()) {
            return Err(SummarizationError::Dataset(format!(
                "unknown split '{}' in record {}",
                record.split, record.id
            )));
        }
        groups.entry(record.split.clone()).or_default().push(record);
    }
    Ok(groups)
}

pub struct DataTransformation {
    config: DataTransformationConfig,
}

impl DataTransformation {
    pub fn new(config: DataTransformationConfig) -> Self {
        Self { config }
    }

    /// Encode the raw dataset and write per-split encoded files.
    pub fn run(&self) -> Result<(), SummarizationError> {
        let records: Vec<DialogueRecord> = read_jsonl(&self.config.data_path)?;
        info!(
            "Loaded {} raw records from: {}",
            records.len(),
            self.config.data_path.display()
        );

        let tokenizer_file = self.config.tokenizer_path.join(TOKENIZER_FILE);
        let mut tokenizer = Tokenizer::from_file(&tokenizer_file)?;
        tokenizer.with_truncation(Some(TruncationParams {
            max_length: self.config.max_input_length,
            ..TruncationParams::default()
        }))?;

        let groups = partition_by_split(records)?;
        for split in SPLITS {
            let rows = groups.get(split).map(Vec::as_slice).unwrap_or(&[]);
            let encoded = rows
                .iter()
                .map(|record| self.encode_record(&tokenizer, record))
                .collect::<Result<Vec<_>, _>>()?;

            let output = self.config.root_dir.join(format!("{split}.jsonl"));
            write_jsonl(&output, &encoded)?;
            info!(
                "Wrote {} encoded records to: {}",
                encoded.len(),
                output.display()
            );
        }

        Ok(())
    }

    fn encode_record(
        &self,
        tokenizer: &Tokenizer,
        record: &DialogueRecord,
    ) -> Result<EncodedRecord, SummarizationError> {
        let inputs = tokenizer.encode(record.dialogue.as_str(), true)?;
        let targets = tokenizer.encode(record.summary.as_str(), true)?;

        let input_ids = inputs.get_ids().iter().map(|id| i64::from(*id)).collect();
        // Summaries get their own, shorter budget than the encoder window
        let labels = targets
            .get_ids()
            .iter()
            .take(self.config.max_target_length)
            .map(|id| i64::from(*id))
            .collect();

        Ok(EncodedRecord {
            id: record.id.clone(),
            input_ids,
            labels,
        })
    }
}
