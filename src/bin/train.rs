use clap::{Parser, ValueEnum};

use condense::core::config::AppConfig;
use condense::pipeline::{
    self, DataIngestion, DataTransformation, ModelEvaluation, ModelTrainer,
};

/// Run the summarization training pipeline.
#[derive(Parser)]
#[command(name = "condense-train")]
struct Cli {
    /// Run a single pipeline stage instead of the full pipeline
    #[arg(long, value_enum)]
    stage: Option<Stage>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Stage {
    Ingestion,
    Transformation,
    Training,
    Evaluation,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    condense::setup_logging();
    let cli = Cli::parse();
    let config = AppConfig::load()?;

    match cli.stage {
        None => pipeline::run_all(&config).await?,
        Some(Stage::Ingestion) => {
            DataIngestion::new(config.data_ingestion()?).run().await?;
        }
        Some(Stage::Transformation) => {
            DataTransformation::new(config.data_transformation()?).run()?;
        }
        Some(Stage::Training) => {
            ModelTrainer::new(config.model_trainer()?).run()?;
        }
        Some(Stage::Evaluation) => {
            ModelEvaluation::new(config.model_evaluation()?).run().await?;
        }
    }

    Ok(())
}
