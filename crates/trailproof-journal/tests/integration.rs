use serde::{Deserialize, Serialize};
use std::fs;
use tempfile::TempDir;
use trailproof_journal::{replay, JournalReader, JournalWriter, ReadMode, WriteOptions};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Record {
    id: String,
    n: u32,
    note: Option<String>,
}

fn record(id: &str, n: u32) -> Record {
    Record {
        id: id.to_string(),
        n,
        note: None,
    }
}

#[test]
fn test_write_read_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("trail.jsonl");

    let writer = JournalWriter::new(&path, WriteOptions::default());
    writer.append(&record("a", 1)).unwrap();
    writer.append(&record("b", 2)).unwrap();

    let mut reader = JournalReader::open(&path, ReadMode::Strict).unwrap();
    assert_eq!(reader.read_record::<Record>().unwrap(), Some(record("a", 1)));
    assert_eq!(reader.read_record::<Record>().unwrap(), Some(record("b", 2)));
    assert_eq!(reader.read_record::<Record>().unwrap(), None);
    assert_eq!(reader.line(), 2);
}

#[test]
fn test_one_compact_object_per_line() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("trail.jsonl");

    let writer = JournalWriter::new(&path, WriteOptions::default());
    writer
        .append(&Record {
            id: "multi\nline".into(),
            n: 7,
            note: None,
        })
        .unwrap();
    writer.append(&record("b", 2)).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], r#"{"id":"multi\nline","n":7,"note":null}"#);
    assert!(contents.ends_with('\n'));
}

#[test]
fn test_file_created_lazily() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("trail.jsonl");

    let writer = JournalWriter::new(&path, WriteOptions::default());
    assert!(!path.exists());
    writer.sync().unwrap();
    assert!(!path.exists());

    writer.append(&record("a", 1)).unwrap();
    assert!(path.exists());
}

#[cfg(unix)]
#[test]
fn test_file_is_owner_only() {
    use std::os::unix::fs::PermissionsExt;

    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("trail.jsonl");

    JournalWriter::new(&path, WriteOptions::default())
        .append(&record("a", 1))
        .unwrap();

    let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
    assert_eq!(mode, 0o600);
}

#[test]
fn test_append_to_existing_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("trail.jsonl");
    fs::write(&path, "{\"id\":\"a\",\"n\":1,\"note\":null}\n").unwrap();

    let writer = JournalWriter::new(&path, WriteOptions { sync: true });
    writer.append(&record("b", 2)).unwrap();
    writer.sync().unwrap();

    let recovered = replay::<Record, _>(&path, ReadMode::Strict).unwrap();
    assert_eq!(recovered.records, vec![record("a", 1), record("b", 2)]);
}

#[test]
fn test_append_into_missing_directory_fails() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("missing").join("trail.jsonl");

    let writer = JournalWriter::new(&path, WriteOptions::default());
    assert!(writer.append(&record("a", 1)).is_err());
}

#[test]
fn test_replay_missing_file_is_empty() {
    let temp_dir = TempDir::new().unwrap();
    let recovered =
        replay::<Record, _>(temp_dir.path().join("absent.jsonl"), ReadMode::Strict).unwrap();
    assert!(recovered.records.is_empty());
    assert!(recovered.corrupt_lines.is_empty());
}
