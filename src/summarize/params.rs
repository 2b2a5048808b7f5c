//! Generation parameter derivation.
//!
//! The summary length budget scales with the input: short inputs get a
//! budget of half their word count (capped at 32 tokens), medium inputs
//! 64, long inputs 128. Beam count and length penalty are fixed.

/// Exponential length penalty applied during beam search.
pub const LENGTH_PENALTY: f64 = 0.8;

/// Number of beams explored during generation.
pub const NUM_BEAMS: i64 = 8;

const SHORT_INPUT_WORDS: usize = 50;
const MEDIUM_INPUT_WORDS: usize = 200;
const SHORT_MAX_LENGTH: i64 = 32;
const MEDIUM_MAX_LENGTH: i64 = 64;
const LONG_MAX_LENGTH: i64 = 128;

/// Parameters handed to the generation backend. Always derived from the
/// input, never supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationParameters {
    pub length_penalty: f64,
    pub num_beams: i64,
    pub max_length: i64,
}

impl GenerationParameters {
    /// Derive parameters from the raw input text.
    #[must_use]
    pub fn for_input(text: &str) -> Self {
        Self::for_word_count(text.split_whitespace().count())
    }

    /// Derive parameters from a whitespace-delimited word count.
    ///
    /// Note: inputs of a single word derive `max_length = 0`, which makes
    /// the backend emit an empty candidate.
    #[must_use]
    pub fn for_word_count(word_count: usize) -> Self {
        let max_length = if word_count < SHORT_INPUT_WORDS {
            (word_count as i64 / 2).min(SHORT_MAX_LENGTH)
        } else if word_count < MEDIUM_INPUT_WORDS {
            MEDIUM_MAX_LENGTH
        } else {
            LONG_MAX_LENGTH
        };

        Self {
            length_penalty: LENGTH_PENALTY,
            num_beams: NUM_BEAMS,
            max_length,
        }
    }
}
