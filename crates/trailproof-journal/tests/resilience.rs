use serde::Deserialize;
use std::fs;
use tempfile::TempDir;
use trailproof_journal::{replay, JournalError, JournalReader, ReadMode};

#[derive(Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
struct Record {
    id: String,
}

fn write_journal(contents: &[u8]) -> (TempDir, std::path::PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("trail.jsonl");
    fs::write(&path, contents).unwrap();
    (temp_dir, path)
}

#[test]
fn test_corrupt_line_between_valid_lines() {
    let (_dir, path) = write_journal(b"{\"id\":\"a\"}\nthis is not valid json\n{\"id\":\"b\"}\n");

    let recovered = replay::<Record, _>(&path, ReadMode::Permissive).unwrap();
    assert_eq!(recovered.records.len(), 2);
    assert_eq!(recovered.corrupt_lines, vec![1]);
}

#[test]
fn test_blank_lines_are_not_corrupt() {
    let (_dir, path) = write_journal(b"\n{\"id\":\"a\"}\n   \n\r\n{\"id\":\"b\"}\n\n");

    let recovered = replay::<Record, _>(&path, ReadMode::Strict).unwrap();
    assert_eq!(recovered.records.len(), 2);
    assert!(recovered.corrupt_lines.is_empty());
}

#[test]
fn test_line_indices_count_blank_lines() {
    let (_dir, path) = write_journal(b"{\"id\":\"a\"}\n\ngarbage\n{\"id\":\"b\"}\n{\"wrong\":1}\n");

    let recovered = replay::<Record, _>(&path, ReadMode::Permissive).unwrap();
    assert_eq!(recovered.records.len(), 2);
    assert_eq!(recovered.corrupt_lines, vec![2, 4]);
}

#[test]
fn test_invalid_utf8_line_is_corrupt() {
    let mut contents = b"{\"id\":\"a\"}\n".to_vec();
    contents.extend_from_slice(&[0xff, 0xfe, b'\n']);
    contents.extend_from_slice(b"{\"id\":\"b\"}\n");
    let (_dir, path) = write_journal(&contents);

    let recovered = replay::<Record, _>(&path, ReadMode::Permissive).unwrap();
    assert_eq!(
        recovered.records,
        vec![Record { id: "a".into() }, Record { id: "b".into() }]
    );
    assert_eq!(recovered.corrupt_lines, vec![1]);
}

#[test]
fn test_truncated_final_line() {
    let (_dir, path) = write_journal(b"{\"id\":\"a\"}\n{\"id\":\"b");

    let recovered = replay::<Record, _>(&path, ReadMode::Permissive).unwrap();
    assert_eq!(recovered.records.len(), 1);
    assert_eq!(recovered.corrupt_lines, vec![1]);
}

#[test]
fn test_final_line_without_newline_is_read() {
    let (_dir, path) = write_journal(b"{\"id\":\"a\"}\n{\"id\":\"b\"}");

    let recovered = replay::<Record, _>(&path, ReadMode::Strict).unwrap();
    assert_eq!(recovered.records.len(), 2);
}

#[test]
fn test_strict_mode_stops_at_corruption() {
    let (_dir, path) = write_journal(b"{\"id\":\"a\"}\nnot json\n{\"id\":\"b\"}\n");

    let mut reader = JournalReader::open(&path, ReadMode::Strict).unwrap();
    assert!(reader.read_record::<Record>().unwrap().is_some());
    match reader.read_record::<Record>() {
        Err(JournalError::CorruptLine { line, .. }) => assert_eq!(line, 1),
        other => panic!("expected CorruptLine, got {:?}", other),
    }
}

#[test]
fn test_directory_path_is_an_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let result = replay::<Record, _>(temp_dir.path(), ReadMode::Permissive);
    assert!(result.is_err());
}
