use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body of a `POST /predict` request.
#[derive(Debug, Deserialize)]
pub struct SummarizeRequest {
    pub text: String,
}

/// One raw dataset row: a dialogue and its reference summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DialogueRecord {
    pub id: String,
    pub dialogue: String,
    pub summary: String,
    // Records without an explicit split land in the training set
    #[serde(default = "default_split")]
    pub split: String,
}

fn default_split() -> String {
    "train".to_string()
}

/// One transformed dataset row: token ids for the dialogue and its summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncodedRecord {
    pub id: String,
    pub input_ids: Vec<i64>,
    pub labels: Vec<i64>,
}

/// Aggregated ROUGE f-measures written by the evaluation stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationReport {
    pub rouge1: f64,
    pub rouge2: f64,
    pub rouge_l: f64,
    pub sample_count: usize,
    pub generated_at: DateTime<Utc>,
}
