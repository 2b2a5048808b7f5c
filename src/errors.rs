use thiserror::Error;

/// Failure surface for the summarization service.
///
/// An operation either fully succeeds or fails with exactly one of these
/// variants; there are no partial results. Message formatting for HTTP
/// responses lives at the API boundary, not here.
#[derive(Debug, Error)]
pub enum SummarizationError {
    #[error("Failed to load configuration: {0}")]
    Config(String),

    #[error("Failed to access the filesystem: {0}")]
    Io(String),

    #[error("Failed to download dataset: {0}")]
    Download(String),

    #[error("Failed to load or run tokenizer: {0}")]
    Tokenizer(String),

    #[error("Failed to load or run summarization model: {0}")]
    Model(String),

    #[error("Invalid dataset: {0}")]
    Dataset(String),
}

impl From<std::io::Error> for SummarizationError {
    fn from(error: std::io::Error) -> Self {
        SummarizationError::Io(error.to_string())
    }
}

impl From<reqwest::Error> for SummarizationError {
    fn from(error: reqwest::Error) -> Self {
        SummarizationError::Download(error.to_string())
    }
}

impl From<tch::TchError> for SummarizationError {
    fn from(error: tch::TchError) -> Self {
        SummarizationError::Model(error.to_string())
    }
}

impl From<tokenizers::Error> for SummarizationError {
    fn from(error: tokenizers::Error) -> Self {
        SummarizationError::Tokenizer(error.to_string())
    }
}

impl From<serde_json::Error> for SummarizationError {
    fn from(error: serde_json::Error) -> Self {
        SummarizationError::Dataset(error.to_string())
    }
}
