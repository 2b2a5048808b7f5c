//! ROUGE scoring for the evaluation stage.
//!
//! Implements the f-measure variants of ROUGE-1, ROUGE-2 (clipped n-gram
//! overlap) and ROUGE-L (longest common subsequence) over lowercased
//! alphanumeric tokens.

use std::collections::HashMap;

/// Per-pair ROUGE f-measures.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RougeScores {
    pub rouge1: f64,
    pub rouge2: f64,
    pub rouge_l: f64,
}

/// Score a candidate summary against its reference.
#[must_use]
pub fn score(candidate: &str, reference: &str) -> RougeScores {
    let candidate_tokens = tokens(candidate);
    let reference_tokens = tokens(reference);
    RougeScores {
        rouge1: rouge_n(&candidate_tokens, &reference_tokens, 1),
        rouge2: rouge_n(&candidate_tokens, &reference_tokens, 2),
        rouge_l: rouge_l(&candidate_tokens, &reference_tokens),
    }
}

fn tokens(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(str::to_lowercase)
        .collect()
}

fn ngram_counts(tokens: &[String], n: usize) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for gram in tokens.windows(n) {
        *counts.entry(gram.join(" ")).or_insert(0) += 1;
    }
    counts
}

fn f_measure(overlap: usize, candidate_total: usize, reference_total: usize) -> f64 {
    if candidate_total == 0 || reference_total == 0 || overlap == 0 {
        return 0.0;
    }
    let precision = overlap as f64 / candidate_total as f64;
    let recall = overlap as f64 / reference_total as f64;
    2.0 * precision * recall / (precision + recall)
}

fn rouge_n(candidate: &[String], reference: &[String], n: usize) -> f64 {
    let candidate_grams = ngram_counts(candidate, n);
    let reference_grams = ngram_counts(reference, n);

    let overlap: usize = candidate_grams
        .iter()
        .map(|(gram, count)| count.min(reference_grams.get(gram).unwrap_or(&0)))
        .sum();
    let candidate_total: usize = candidate_grams.values().sum();
    let reference_total: usize = reference_grams.values().sum();

    f_measure(overlap, candidate_total, reference_total)
}

fn rouge_l(candidate: &[String], reference: &[String]) -> f64 {
    f_measure(lcs_length(candidate, reference), candidate.len(), reference.len())
}

fn lcs_length(a: &[String], b: &[String]) -> usize {
    if a.is_empty() || b.is_empty() {
        return 0;
    }
    let mut previous = vec![0usize; b.len() + 1];
    let mut current = vec![0usize; b.len() + 1];
    for item in a {
        for (j, other) in b.iter().enumerate() {
            current[j + 1] = if item == other {
                previous[j] + 1
            } else {
                previous[j + 1].max(current[j])
            };
        }
        std::mem::swap(&mut previous, &mut current);
    }
    previous[b.len()]
}
