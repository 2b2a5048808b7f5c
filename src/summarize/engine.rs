//! The prediction engine behind `POST /predict` and the evaluation stage.

use std::sync::Arc;

use tracing::{error, info};

use crate::errors::SummarizationError;
use crate::summarize::backend::SummarizationBackend;
use crate::summarize::params::GenerationParameters;
use crate::summarize::postprocess::clean_summary;

/// Stateless prediction front over a summarization backend.
///
/// Holds the backend behind an `Arc` so one engine instance can be shared
/// read-only across concurrent requests for the process lifetime.
pub struct SummarizationEngine {
    backend: Arc<dyn SummarizationBackend>,
}

impl SummarizationEngine {
    pub fn new(backend: Arc<dyn SummarizationBackend>) -> Self {
        Self { backend }
    }

    /// Summarize `text`: derive generation parameters from its word count,
    /// invoke the backend, and normalize the returned candidate.
    ///
    /// # Errors
    ///
    /// Any backend failure is logged and surfaced unchanged as a
    /// [`SummarizationError`]; there is no retry.
    pub async fn predict(&self, text: &str) -> Result<String, SummarizationError> {
        let params = GenerationParameters::for_input(text);
        info!(
            max_length = params.max_length,
            num_beams = params.num_beams,
            length_penalty = params.length_penalty,
            "Derived generation parameters"
        );

        let raw = match self.backend.summarize(text, &params).await {
            Ok(candidate) => candidate,
            Err(e) => {
                error!("Error in prediction: {e}");
                return Err(e);
            }
        };

        Ok(clean_summary(&raw))
    }
}
