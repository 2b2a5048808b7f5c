//! Shared application state: the configuration and the engine handle.

use std::sync::Arc;

use tokio::sync::OnceCell;
use tokio::task;

use crate::core::config::AppConfig;
use crate::errors::SummarizationError;
use crate::summarize::{SummarizationEngine, TorchBackend};

/// State shared across requests.
///
/// The engine initializes at most once, on the first prediction request;
/// afterwards every request reuses the same immutable handle for the
/// process lifetime.
#[derive(Clone)]
pub struct AppState {
    config: Arc<AppConfig>,
    engine: Arc<OnceCell<Arc<SummarizationEngine>>>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config: Arc::new(config),
            engine: Arc::new(OnceCell::new()),
        }
    }

    /// State with a pre-built engine, bypassing artifact loading.
    pub fn with_engine(config: AppConfig, engine: Arc<SummarizationEngine>) -> Self {
        Self {
            config: Arc::new(config),
            engine: Arc::new(OnceCell::new_with(Some(engine))),
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// The process-wide engine, loading the artifacts on first use.
    pub async fn engine(&self) -> Result<Arc<SummarizationEngine>, SummarizationError> {
        self.engine
            .get_or_try_init(|| async {
                // The prediction path reads its artifact locations from the
                // evaluation section, mirroring the training layout.
                let artifacts = self.config.model_evaluation()?;
                let tokenizer_path = artifacts.tokenizer_path.clone();
                let model_path = artifacts.model_path.clone();
                let backend =
                    task::spawn_blocking(move || TorchBackend::load(&tokenizer_path, &model_path))
                        .await
                        .map_err(|e| {
                            SummarizationError::Model(format!("model load task failed: {e}"))
                        })??;
                Ok(Arc::new(SummarizationEngine::new(Arc::new(backend))))
            })
            .await
            .cloned()
    }
}
