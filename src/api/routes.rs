//! Route handlers.
//!
//! The handlers translate between HTTP and the typed core: the engine
//! returns `SummarizationError`, and only here does it become the
//! caller-facing error string.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::{Value, json};
use tracing::{error, info};
use uuid::Uuid;

use crate::core::models::SummarizeRequest;
use crate::errors::SummarizationError;
use crate::pipeline;

use super::state::AppState;

const PREVIEW_CHARS: usize = 100;

pub async fn index() -> &'static str {
    "condense text summarization service. POST /predict with {\"text\": ...} \
     to summarize; GET /train to run the training pipeline."
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Summarize the posted text.
pub async fn predict(
    State(state): State<AppState>,
    Json(request): Json<SummarizeRequest>,
) -> Response {
    let request_id = Uuid::new_v4();
    let preview: String = request.text.chars().take(PREVIEW_CHARS).collect();
    info!(%request_id, "Received prediction request for text: {preview}...");

    let engine = match state.engine().await {
        Ok(engine) => engine,
        Err(e) => {
            error!(%request_id, "Failed to initialize engine: {e}");
            return summary_failure(&e);
        }
    };

    match engine.predict(&request.text).await {
        Ok(summary) => {
            info!(%request_id, "Prediction completed successfully");
            (StatusCode::OK, summary).into_response()
        }
        Err(e) => {
            error!(%request_id, "Error in prediction: {e}");
            summary_failure(&e)
        }
    }
}

/// Run the full training pipeline in-process.
pub async fn train(State(state): State<AppState>) -> Response {
    info!("Training run requested");
    match pipeline::run_all(state.config()).await {
        Ok(()) => (StatusCode::OK, "Training successful!!").into_response(),
        Err(e) => {
            error!("Training run failed: {e}");
            (StatusCode::INTERNAL_SERVER_ERROR, format!("Error: {e}")).into_response()
        }
    }
}

fn summary_failure(error: &SummarizationError) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        format!("Error: Failed to generate summary. {error}"),
    )
        .into_response()
}
