//! Cleanup of raw model output before it reaches the caller.

use once_cell::sync::Lazy;
use regex::Regex;

/// Placeholder some summarization checkpoints emit instead of a newline.
const NEWLINE_PLACEHOLDER: &str = "<n>";

static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Normalize a raw summary candidate.
///
/// Replaces the `<n>` placeholder and raw newlines with single spaces,
/// collapses any whitespace run to exactly one space, and trims the ends.
/// Applying this twice yields the same result as applying it once.
#[must_use]
pub fn clean_summary(raw: &str) -> String {
    let replaced = raw.replace(NEWLINE_PLACEHOLDER, " ").replace('\n', " ");
    WHITESPACE_RUN.replace_all(&replaced, " ").trim().to_string()
}
