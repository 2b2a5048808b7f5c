use std::path::PathBuf;

use condense::core::config::AppConfig;
use condense::errors::SummarizationError;
use tempfile::TempDir;

fn write_fixture_files(dir: &TempDir) -> (PathBuf, PathBuf) {
    let root = dir.path();
    let config_path = root.join("config.yaml");
    let params_path = root.join("params.yaml");

    let config = format!(
        r#"
artifacts_root: {root}/artifacts

data_ingestion:
  root_dir: {root}/artifacts/data_ingestion
  source_url: https://example.com/samsum.jsonl
  local_data_file: {root}/artifacts/data_ingestion/samsum.jsonl

data_transformation:
  root_dir: {root}/artifacts/data_transformation
  data_path: {root}/artifacts/data_ingestion/samsum.jsonl
  tokenizer_path: {root}/artifacts/pretrained/tokenizer

model_trainer:
  root_dir: {root}/artifacts/model_trainer
  data_path: {root}/artifacts/data_transformation
  model_path: {root}/artifacts/pretrained/train_module.pt

model_evaluation:
  root_dir: {root}/artifacts/model_evaluation
  data_path: {root}/artifacts/data_ingestion/samsum.jsonl
  model_path: {root}/artifacts/pretrained
  tokenizer_path: {root}/artifacts/pretrained/tokenizer
  metrics_file: {root}/artifacts/model_evaluation/metrics.json
"#,
        root = root.display()
    );
    let params = r#"
data_transformation:
  max_input_length: 1024
  max_target_length: 128

model_trainer:
  num_train_epochs: 2
  batch_size: 4
  learning_rate: 5.0e-5
  warmup_steps: 100
  weight_decay: 0.01
  logging_steps: 10
  eval_steps: 50
  save_steps: 200
  gradient_accumulation_steps: 8
"#;

    std::fs::write(&config_path, config).expect("write config fixture");
    std::fs::write(&params_path, params).expect("write params fixture");
    (config_path, params_path)
}

#[test]
fn test_config_loads_typed_stage_sections() {
    let dir = tempfile::tempdir().expect("temp dir");
    let (config_path, params_path) = write_fixture_files(&dir);

    let config = AppConfig::load_from(&config_path, &params_path).expect("config loads");

    let ingestion = config.data_ingestion().expect("ingestion section");
    assert_eq!(ingestion.source_url, "https://example.com/samsum.jsonl");

    let transformation = config.data_transformation().expect("transformation section");
    assert_eq!(transformation.max_input_length, 1024);
    assert_eq!(transformation.max_target_length, 128);

    let trainer = config.model_trainer().expect("trainer section");
    assert_eq!(trainer.num_train_epochs, 2);
    assert_eq!(trainer.gradient_accumulation_steps, 8);
    assert!((trainer.learning_rate - 5.0e-5).abs() < 1e-12);

    let evaluation = config.model_evaluation().expect("evaluation section");
    assert!(evaluation.metrics_file.ends_with("metrics.json"));
}

#[test]
fn test_stage_accessors_create_root_directories() {
    let dir = tempfile::tempdir().expect("temp dir");
    let (config_path, params_path) = write_fixture_files(&dir);

    let config = AppConfig::load_from(&config_path, &params_path).expect("config loads");
    let ingestion = config.data_ingestion().expect("ingestion section");

    assert!(ingestion.root_dir.is_dir(), "accessor should create the stage root");
}

#[test]
fn test_missing_config_file_is_config_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let (_, params_path) = write_fixture_files(&dir);

    let error = AppConfig::load_from(dir.path().join("absent.yaml"), &params_path)
        .expect_err("missing file should fail");
    assert!(matches!(error, SummarizationError::Config(_)));
}

#[test]
fn test_malformed_yaml_is_config_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let (config_path, params_path) = write_fixture_files(&dir);
    std::fs::write(&params_path, "model_trainer: [not, a, mapping").expect("corrupt params");

    let error = AppConfig::load_from(&config_path, &params_path)
        .expect_err("malformed yaml should fail");
    assert!(matches!(error, SummarizationError::Config(_)));
}
