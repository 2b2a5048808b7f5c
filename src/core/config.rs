//! Configuration for the pipeline stages and the service.
//!
//! Two YAML files drive the system: `config/config.yaml` describes the
//! artifact layout and external paths, `params.yaml` carries the training
//! hyperparameters. Both load once at startup into an immutable
//! [`AppConfig`]; the per-stage accessors compose the two files into typed
//! stage configs and make sure each stage's root directory exists.

use std::env;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::info;

use crate::errors::SummarizationError;
use crate::utils::fs::{ensure_dir, read_yaml};

/// Default location of the artifact layout file.
pub const DEFAULT_CONFIG_FILE: &str = "config/config.yaml";
/// Default location of the hyperparameter file.
pub const DEFAULT_PARAMS_FILE: &str = "params.yaml";

const DEFAULT_SERVER_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Clone, Deserialize)]
struct LayoutFile {
    artifacts_root: PathBuf,
    data_ingestion: IngestionSection,
    data_transformation: TransformationSection,
    model_trainer: TrainerSection,
    model_evaluation: EvaluationSection,
}

#[derive(Debug, Clone, Deserialize)]
struct IngestionSection {
    root_dir: PathBuf,
    source_url: String,
    local_data_file: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
struct TransformationSection {
    root_dir: PathBuf,
    data_path: PathBuf,
    tokenizer_path: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
struct TrainerSection {
    root_dir: PathBuf,
    data_path: PathBuf,
    model_path: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
struct EvaluationSection {
    root_dir: PathBuf,
    data_path: PathBuf,
    model_path: PathBuf,
    tokenizer_path: PathBuf,
    metrics_file: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
struct ParamsFile {
    data_transformation: TransformationParams,
    model_trainer: TrainerParams,
}

#[derive(Debug, Clone, Deserialize)]
struct TransformationParams {
    max_input_length: usize,
    max_target_length: usize,
}

#[derive(Debug, Clone, Deserialize)]
struct TrainerParams {
    num_train_epochs: usize,
    batch_size: usize,
    learning_rate: f64,
    warmup_steps: usize,
    weight_decay: f64,
    logging_steps: usize,
    eval_steps: usize,
    save_steps: usize,
    gradient_accumulation_steps: usize,
}

/// Typed config for the data ingestion stage.
#[derive(Debug, Clone)]
pub struct DataIngestionConfig {
    pub root_dir: PathBuf,
    pub source_url: String,
    pub local_data_file: PathBuf,
}

/// Typed config for the data transformation stage.
#[derive(Debug, Clone)]
pub struct DataTransformationConfig {
    pub root_dir: PathBuf,
    pub data_path: PathBuf,
    pub tokenizer_path: PathBuf,
    pub max_input_length: usize,
    pub max_target_length: usize,
}

/// Typed config for the model training stage.
#[derive(Debug, Clone)]
pub struct ModelTrainerConfig {
    pub root_dir: PathBuf,
    pub data_path: PathBuf,
    pub model_path: PathBuf,
    pub num_train_epochs: usize,
    pub batch_size: usize,
    pub learning_rate: f64,
    pub warmup_steps: usize,
    pub weight_decay: f64,
    pub logging_steps: usize,
    pub eval_steps: usize,
    pub save_steps: usize,
    pub gradient_accumulation_steps: usize,
}

/// Typed config for the model evaluation stage. The prediction path reuses
/// this section for its tokenizer and model artifact locations.
#[derive(Debug, Clone)]
pub struct ModelEvaluationConfig {
    pub root_dir: PathBuf,
    pub data_path: PathBuf,
    pub model_path: PathBuf,
    pub tokenizer_path: PathBuf,
    pub metrics_file: PathBuf,
}

/// Process-wide configuration, immutable after [`AppConfig::load`].
#[derive(Debug, Clone)]
pub struct AppConfig {
    layout: LayoutFile,
    params: ParamsFile,
    server_addr: SocketAddr,
}

impl AppConfig {
    /// Load configuration from the default YAML locations, overridable via
    /// the `CONDENSE_CONFIG` and `CONDENSE_PARAMS` environment variables.
    pub fn load() -> Result<Self, SummarizationError> {
        let config_path =
            env::var("CONDENSE_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());
        let params_path =
            env::var("CONDENSE_PARAMS").unwrap_or_else(|_| DEFAULT_PARAMS_FILE.to_string());
        Self::load_from(config_path, params_path)
    }

    /// Load configuration from explicit YAML file locations.
    pub fn load_from(
        config_path: impl AsRef<Path>,
        params_path: impl AsRef<Path>,
    ) -> Result<Self, SummarizationError> {
        let layout: LayoutFile = read_yaml(config_path.as_ref())?;
        let params: ParamsFile = read_yaml(params_path.as_ref())?;

        let server_addr = match env::var("CONDENSE_ADDR") {
            Ok(raw) => raw
                .parse()
                .map_err(|e| SummarizationError::Config(format!("CONDENSE_ADDR: {e}")))?,
            Err(_) => DEFAULT_SERVER_ADDR
                .parse()
                .expect("default server address is well formed"),
        };

        ensure_dir(&layout.artifacts_root)?;
        info!(
            "Configuration loaded from {} and {}",
            config_path.as_ref().display(),
            params_path.as_ref().display()
        );

        Ok(Self {
            layout,
            params,
            server_addr,
        })
    }

    /// Address the HTTP service binds to (`CONDENSE_ADDR`, default 0.0.0.0:8080).
    pub fn server_addr(&self) -> SocketAddr {
        self.server_addr
    }

    pub fn data_ingestion(&self) -> Result<DataIngestionConfig, SummarizationError> {
        let section = &self.layout.data_ingestion;
        ensure_dir(&section.root_dir)?;
        Ok(DataIngestionConfig {
            root_dir: section.root_dir.clone(),
            source_url: section.source_url.clone(),
            local_data_file: section.local_data_file.clone(),
        })
    }

    pub fn data_transformation(&self) -> Result<DataTransformationConfig, SummarizationError> {
        let section = &self.layout.data_transformation;
        let params = &self.params.data_transformation;
        ensure_dir(&section.root_dir)?;
        Ok(DataTransformationConfig {
            root_dir: section.root_dir.clone(),
            data_path: section.data_path.clone(),
            tokenizer_path: section.tokenizer_path.clone(),
            max_input_length: params.max_input_length,
            max_target_length: params.max_target_length,
        })
    }

    pub fn model_trainer(&self) -> Result<ModelTrainerConfig, SummarizationError> {
        let section = &self.layout.model_trainer;
        let params = &self.params.model_trainer;
        ensure_dir(&section.root_dir)?;
        Ok(ModelTrainerConfig {
            root_dir: section.root_dir.clone(),
            data_path: section.data_path.clone(),
            model_path: section.model_path.clone(),
            num_train_epochs: params.num_train_epochs,
            batch_size: params.batch_size,
            learning_rate: params.learning_rate,
            warmup_steps: params.warmup_steps,
            weight_decay: params.weight_decay,
            logging_steps: params.logging_steps,
            eval_steps: params.eval_steps,
            save_steps: params.save_steps,
            gradient_accumulation_steps: params.gradient_accumulation_steps,
        })
    }

    pub fn model_evaluation(&self) -> Result<ModelEvaluationConfig, SummarizationError> {
        let section = &self.layout.model_evaluation;
        ensure_dir(&section.root_dir)?;
        Ok(ModelEvaluationConfig {
            root_dir: section.root_dir.clone(),
            data_path: section.data_path.clone(),
            model_path: section.model_path.clone(),
            tokenizer_path: section.tokenizer_path.clone(),
            metrics_file: section.metrics_file.clone(),
        })
    }
}
