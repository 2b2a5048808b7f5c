//! The four-stage training pipeline.
//!
//! Stages run in a fixed order — ingestion, transformation, training,
//! evaluation — each constructed from its typed config section with a
//! single `run` entry point. A stage failure stops the pipeline.

pub mod evaluation;
pub mod ingestion;
pub mod training;
pub mod transformation;

use tokio::task;
use tracing::{error, info};

use crate::core::config::AppConfig;
use crate::errors::SummarizationError;

pub use evaluation::ModelEvaluation;
pub use ingestion::DataIngestion;
pub use training::ModelTrainer;
pub use transformation::{DataTransformation, partition_by_split};

pub const STAGE_DATA_INGESTION: &str = "Data Ingestion";
pub const STAGE_DATA_TRANSFORMATION: &str = "Data Transformation";
pub const STAGE_MODEL_TRAINING: &str = "Model Training";
pub const STAGE_MODEL_EVALUATION: &str = "Model Evaluation";

/// Run all four pipeline stages in order, failing fast on the first error.
pub async fn run_all(config: &AppConfig) -> Result<(), SummarizationError> {
    stage_started(STAGE_DATA_INGESTION);
    DataIngestion::new(config.data_ingestion()?)
        .run()
        .await
        .map_err(|e| stage_failed(STAGE_DATA_INGESTION, e))?;
    stage_completed(STAGE_DATA_INGESTION);

    stage_started(STAGE_DATA_TRANSFORMATION);
    let transformation = DataTransformation::new(config.data_transformation()?);
    task::block_in_place(|| transformation.run())
        .map_err(|e| stage_failed(STAGE_DATA_TRANSFORMATION, e))?;
    stage_completed(STAGE_DATA_TRANSFORMATION);

    stage_started(STAGE_MODEL_TRAINING);
    let trainer = ModelTrainer::new(config.model_trainer()?);
    task::block_in_place(|| trainer.run())
        .map_err(|e| stage_failed(STAGE_MODEL_TRAINING, e))?;
    stage_completed(STAGE_MODEL_TRAINING);

    stage_started(STAGE_MODEL_EVALUATION);
    ModelEvaluation::new(config.model_evaluation()?)
        .run()
        .await
        .map_err(|e| stage_failed(STAGE_MODEL_EVALUATION, e))?;
    stage_completed(STAGE_MODEL_EVALUATION);

    Ok(())
}

fn stage_started(stage: &str) {
    info!(stage, "Pipeline stage started");
}

fn stage_completed(stage: &str) {
    info!(stage, "Pipeline stage completed");
}

fn stage_failed(stage: &str, error: SummarizationError) -> SummarizationError {
    error!(stage, "Pipeline stage failed: {error}");
    error
}
