//! Append-only journal format for Trailproof events.
//!
//! This crate provides:
//! - Line-delimited JSON storage, one record per line
//! - Exclusive, owner-only file creation on first write
//! - Reader/replay APIs with strict and permissive corruption handling
//!
//! ## Quick Start
//!
//! ```rust
//! use trailproof_journal::{replay, JournalWriter, ReadMode, WriteOptions};
//! use serde_json::{json, Value};
//!
//! let dir = tempfile::tempdir()?;
//! let path = dir.path().join("trail.jsonl");
//!
//! let writer = JournalWriter::new(&path, WriteOptions::default());
//! writer.append(&json!({"event_id": "evt-001"}))?;
//! writer.append(&json!({"event_id": "evt-002"}))?;
//!
//! let recovered = replay::<Value, _>(&path, ReadMode::Permissive)?;
//! assert_eq!(recovered.records.len(), 2);
//! assert!(recovered.corrupt_lines.is_empty());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Key Types
//!
//! - [`JournalWriter`] - Append records to journal files
//! - [`JournalReader`] - Read records line by line
//! - [`replay`] - Recover every record plus the corrupt line report

#![deny(missing_docs)]

/// Error types for journal operations.
pub mod errors;
/// Journal reader implementation.
pub mod reader;
/// Journal writer implementation.
pub mod writer;

pub use errors::JournalError;
pub use reader::{replay, JournalReader, ReadMode, Replay};
pub use writer::{JournalWriter, WriteOptions};
