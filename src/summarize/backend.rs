//! Backend seam over the pretrained tokenizer and model artifacts.
//!
//! The production backend loads a `tokenizers` tokenizer and a
//! TorchScript export via `tch`. The export carries a `generate` method
//! taking `(input_ids, max_length, num_beams, length_penalty)` and
//! returning candidate sequences ordered best-first; everything
//! generation-related (beam search, forward passes) lives behind that
//! method. Tests substitute scripted backends through the trait.

use std::path::Path;

use async_trait::async_trait;
use tch::{CModule, IValue, Tensor};
use tokenizers::{Tokenizer, TruncationParams};
use tracing::info;

use crate::errors::SummarizationError;
use crate::summarize::params::GenerationParameters;

/// Tokenizer artifact file name inside the tokenizer directory.
pub const TOKENIZER_FILE: &str = "tokenizer.json";
/// TorchScript generation export inside the model directory.
pub const MODEL_FILE: &str = "model.pt";

// Inputs longer than the encoder context window are truncated on encode.
const MAX_INPUT_TOKENS: usize = 1024;

/// Anything that can turn text into a summary candidate.
#[async_trait]
pub trait SummarizationBackend: Send + Sync {
    /// Produce the single best raw summary candidate for `text`.
    async fn summarize(
        &self,
        text: &str,
        params: &GenerationParameters,
    ) -> Result<String, SummarizationError>;
}

/// Production backend over the local tokenizer and TorchScript artifacts.
pub struct TorchBackend {
    tokenizer: Tokenizer,
    module: CModule,
}

impl TorchBackend {
    /// Load the tokenizer and model artifacts from their configured
    /// directories. This is blocking work; callers on the async runtime
    /// should wrap it in `spawn_blocking`.
    pub fn load(tokenizer_dir: &Path, model_dir: &Path) -> Result<Self, SummarizationError> {
        let tokenizer_file = tokenizer_dir.join(TOKENIZER_FILE);
        info!("Loading tokenizer from: {}", tokenizer_file.display());
        let mut tokenizer = Tokenizer::from_file(&tokenizer_file)?;
        tokenizer.with_truncation(Some(TruncationParams {
            max_length: MAX_INPUT_TOKENS,
            ..TruncationParams::default()
        }))?;

        let model_file = model_dir.join(MODEL_FILE);
        info!("Loading model from: {}", model_file.display());
        let module = CModule::load(&model_file)?;

        Ok(Self { tokenizer, module })
    }

    fn generate(
        &self,
        text: &str,
        params: &GenerationParameters,
    ) -> Result<String, SummarizationError> {
        let encoding = self.tokenizer.encode(text, true)?;
        let ids: Vec<i64> = encoding.get_ids().iter().map(|id| i64::from(*id)).collect();
        let input_ids = Tensor::from_slice(&ids).unsqueeze(0);

        let output = tch::no_grad(|| {
            self.module.method_is(
                "generate",
                &[
                    IValue::Tensor(input_ids),
                    IValue::Int(params.max_length),
                    IValue::Int(params.num_beams),
                    IValue::Double(params.length_penalty),
                ],
            )
        })?;

        let IValue::Tensor(candidates) = output else {
            return Err(SummarizationError::Model(
                "generate returned a non-tensor output".to_string(),
            ));
        };

        // Candidates are ordered best-first; flat outputs are a single candidate.
        let best = if candidates.dim() == 2 {
            candidates.get(0)
        } else {
            candidates
        };
        let tokens = Vec::<i64>::try_from(&best)?;
        let tokens: Vec<u32> = tokens
            .into_iter()
            .filter_map(|token| u32::try_from(token).ok())
            .collect();

        Ok(self.tokenizer.decode(&tokens, true)?)
    }
}

#[async_trait]
impl SummarizationBackend for TorchBackend {
    async fn summarize(
        &self,
        text: &str,
        params: &GenerationParameters,
    ) -> Result<String, SummarizationError> {
        // libtorch calls are blocking and must not stall the async workers
        tokio::task::block_in_place(|| self.generate(text, params))
    }
}
