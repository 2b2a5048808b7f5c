//! Stage 4: model evaluation.
//!
//! Generates summaries for the test split through the same engine the
//! prediction route uses, scores them against the references with ROUGE,
//! and writes the aggregated report under the stage root.

use std::fs;
use std::sync::Arc;

use chrono::Utc;
use tokio::task;
use tracing::info;

use crate::core::config::ModelEvaluationConfig;
use crate::core::models::{DialogueRecord, EvaluationReport};
use crate::errors::SummarizationError;
use crate::metrics;
use crate::summarize::{SummarizationEngine, TorchBackend};
use crate::utils::fs::read_jsonl;

pub struct ModelEvaluation {
    config: ModelEvaluationConfig,
}

impl ModelEvaluation {
    pub fn new(config: ModelEvaluationConfig) -> Self {
        Self { config }
    }

    /// Evaluate the model on the test split and write the metrics report.
    pub async fn run(&self) -> Result<EvaluationReport, SummarizationError> {
        let records: Vec<DialogueRecord> = read_jsonl(&self.config.data_path)?;
        let test: Vec<DialogueRecord> = records
            .into_iter()
            .filter(|record| record.split == "test")
            .collect();
        if test.is_empty() {
            return Err(SummarizationError::Dataset(
                "no test split records to evaluate".to_string(),
            ));
        }
        info!("Evaluating on {} test records", test.len());

        let tokenizer_path = self.config.tokenizer_path.clone();
        let model_path = self.config.model_path.clone();
        let backend = task::spawn_blocking(move || TorchBackend::load(&tokenizer_path, &model_path))
            .await
            .map_err(|e| SummarizationError::Model(format!("model load task failed: {e}")))??;
        let engine = SummarizationEngine::new(Arc::new(backend));

        let mut rouge1 = 0.0;
        let mut rouge2 = 0.0;
        let mut rouge_l = 0.0;
        for record in &test {
            let candidate = engine.predict(&record.dialogue).await?;
            let scores = metrics::score(&candidate, &record.summary);
            rouge1 += scores.rouge1;
            rouge2 += scores.rouge2;
            rouge_l += scores.rouge_l;
        }

        let count = test.len() as f64;
        let report = EvaluationReport {
            rouge1: rouge1 / count,
            rouge2: rouge2 / count,
            rouge_l: rouge_l / count,
            sample_count: test.len(),
            generated_at: Utc::now(),
        };

        let serialized = serde_json::to_string_pretty(&report)
            .map_err(|e| SummarizationError::Io(format!("failed to serialize report: {e}")))?;
        fs::write(&self.config.metrics_file, serialized)?;
        info!(
            rouge1 = report.rouge1,
            rouge2 = report.rouge2,
            rouge_l = report.rouge_l,
            "Wrote evaluation report to: {}",
            self.config.metrics_file.display()
        );

        Ok(report)
    }
}
