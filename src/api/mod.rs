//! HTTP service for triggering training and running inference.
//!
//! This module handles:
//! - Router construction and shared application state
//! - `POST /predict` (summarize a text)
//! - `GET /train` (run the four-stage pipeline in-process)
//! - `GET /` and `GET /health` (banner and liveness)

pub mod routes;
pub mod state;

use std::net::SocketAddr;

use axum::Router;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::errors::SummarizationError;

pub use state::AppState;

/// Build the service router over the shared state.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::index))
        .route("/health", get(routes::health))
        .route("/train", get(routes::train))
        .route("/predict", post(routes::predict))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Bind and serve until the process is stopped.
pub async fn serve(addr: SocketAddr, state: AppState) -> Result<(), SummarizationError> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Summarization service listening on http://{addr}");
    axum::serve(listener, router(state)).await?;
    Ok(())
}
