use condense::core::models::{DialogueRecord, EncodedRecord};
use condense::errors::SummarizationError;
use condense::pipeline::partition_by_split;
use condense::utils::fs::{read_jsonl, write_jsonl};

fn record(id: &str, split: &str) -> DialogueRecord {
    DialogueRecord {
        id: id.to_string(),
        dialogue: "A: hi\nB: hello".to_string(),
        summary: "A greets B".to_string(),
        split: split.to_string(),
    }
}

#[test]
fn test_partition_groups_records_by_split() {
    let records = vec![
        record("1", "train"),
        record("2", "test"),
        record("3", "train"),
        record("4", "validation"),
    ];

    let groups = partition_by_split(records).expect("all splits are known");
    assert_eq!(groups.get("train").map(Vec::len), Some(2));
    assert_eq!(groups.get("validation").map(Vec::len), Some(1));
    assert_eq!(groups.get("test").map(Vec::len), Some(1));
}

#[test]
fn test_partition_rejects_unknown_splits() {
    let records = vec![record("1", "train"), record("2", "holdout")];

    let error = partition_by_split(records).expect_err("holdout is not a known split");
    match error {
        SummarizationError::Dataset(msg) => {
            assert!(msg.contains("holdout"), "message should name the split: {msg}");
            assert!(msg.contains('2'), "message should name the record: {msg}");
        }
        other => panic!("Unexpected error type: {other}"),
    }
}

#[test]
fn test_records_without_split_default_to_train() {
    let raw = r#"{"id": "7", "dialogue": "A: hi", "summary": "greeting"}"#;
    let record: DialogueRecord = serde_json::from_str(raw).expect("record parses");
    assert_eq!(record.split, "train");
}

#[test]
fn test_jsonl_round_trip() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("encoded.jsonl");

    let records = vec![
        EncodedRecord {
            id: "1".to_string(),
            input_ids: vec![101, 2023, 102],
            labels: vec![101, 102],
        },
        EncodedRecord {
            id: "2".to_string(),
            input_ids: vec![101, 102],
            labels: vec![101, 7592, 102],
        },
    ];

    write_jsonl(&path, &records).expect("write succeeds");
    let loaded: Vec<EncodedRecord> = read_jsonl(&path).expect("read succeeds");

    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded[0].input_ids, vec![101, 2023, 102]);
    assert_eq!(loaded[1].labels, vec![101, 7592, 102]);
}

#[test]
fn test_read_jsonl_skips_blank_lines() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("sparse.jsonl");
    std::fs::write(
        &path,
        "{\"id\":\"1\",\"dialogue\":\"a\",\"summary\":\"b\"}\n\n\n{\"id\":\"2\",\"dialogue\":\"c\",\"summary\":\"d\"}\n",
    )
    .expect("write fixture");

    let records: Vec<DialogueRecord> = read_jsonl(&path).expect("read succeeds");
    assert_eq!(records.len(), 2);
}

#[test]
fn test_read_jsonl_missing_file_is_io_error() {
    let error = read_jsonl::<DialogueRecord>(std::path::Path::new("no/such/file.jsonl"))
        .expect_err("file does not exist");
    assert!(matches!(error, SummarizationError::Io(_)));
}
