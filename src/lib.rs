/// condense - a text summarization service built on a pretrained
/// sequence-to-sequence model.
///
/// This crate wires together two entry points:
/// 1. An API binary that serves inference requests and can trigger training
/// 2. A pipeline binary that runs the four training stages end to end
///
/// # Architecture
///
/// The system uses:
/// - axum for the HTTP service
/// - tokenizers for loading the pretrained tokenizer artifact
/// - tch (libtorch) for the TorchScript-exported model artifacts
/// - Tokio for the async runtime
///
/// The four pipeline stages (ingestion, transformation, training,
/// evaluation) each read their typed config section and expose a single
/// `run` entry point; the prediction path derives generation parameters
/// from the input length, calls the model backend, and normalizes the
/// returned text.
///
/// # Example
///
/// ```no_run
/// use condense::api::{self, AppState};
/// use condense::core::config::AppConfig;
///
/// #[tokio::main]
/// async fn main() -> anyhow::Result<()> {
///     // Set up structured logging
///     condense::setup_logging();
///
///     let config = AppConfig::load()?;
///     let addr = config.server_addr();
///     api::serve(addr, AppState::new(config)).await?;
///     Ok(())
/// }
/// ```
// Module declarations
pub mod api;
pub mod core;
pub mod errors;
pub mod metrics;
pub mod pipeline;
pub mod summarize;
pub mod utils;

/// Configure structured logging for the service binaries.
///
/// Installs a tracing-subscriber fmt layer filtered by `RUST_LOG`
/// (defaulting to `info`). Call once at the start of each binary.
///
/// # Example
///
/// ```
/// // Initialize structured logging at binary startup
/// condense::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
