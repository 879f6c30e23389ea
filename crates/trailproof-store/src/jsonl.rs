//! Durable backend: one JSON event per line, replayed on open.

use crate::error::StoreError;
use crate::filter::{paginate, QueryFilters, QueryResult};
use crate::traits::TrailStore;
use std::path::Path;
use trailproof_core::{TrailEvent, GENESIS_HASH};
use trailproof_journal::{replay, JournalWriter, ReadMode, WriteOptions};

/// Append-only JSONL file store.
///
/// Opening replays the whole file into an in-memory mirror; every read is
/// served from the mirror. Blank lines are skipped. Lines that are not a
/// well-formed event are skipped too and their zero-based indices reported by
/// [`corrupt_lines`](TrailStore::corrupt_lines).
///
/// The file is created on the first append, exclusively and owner-only.
#[derive(Debug)]
pub struct JsonlStore {
    writer: JournalWriter,
    events: Vec<TrailEvent>,
    corrupt_lines: Vec<usize>,
}

impl JsonlStore {
    /// Opens (or prepares) the journal at `path`, tolerating corrupt lines.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if an existing file cannot be read.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        Self::open_with(path, ReadMode::Permissive, WriteOptions::default())
    }

    /// Opens the journal with explicit read and write options.
    ///
    /// With [`ReadMode::Strict`] the first corrupt line fails the open.
    pub fn open_with<P: AsRef<Path>>(
        path: P,
        mode: ReadMode,
        options: WriteOptions,
    ) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let recovered = replay::<TrailEvent, _>(path, mode)?;

        tracing::debug!(
            path = %path.display(),
            events = recovered.records.len(),
            corrupt = recovered.corrupt_lines.len(),
            "opened jsonl store"
        );

        Ok(Self {
            writer: JournalWriter::new(path, options),
            events: recovered.records,
            corrupt_lines: recovered.corrupt_lines,
        })
    }

    /// Journal file path.
    pub fn path(&self) -> &Path {
        self.writer.path()
    }
}

impl TrailStore for JsonlStore {
    fn append(&mut self, event: TrailEvent) -> Result<(), StoreError> {
        self.writer.append(&event)?;
        self.events.push(event);
        Ok(())
    }

    fn read_all(&self) -> Vec<TrailEvent> {
        self.events.clone()
    }

    fn query(&self, filters: &QueryFilters) -> QueryResult {
        paginate(&self.events, filters)
    }

    fn last_hash(&self) -> String {
        self.events
            .last()
            .map(|e| e.hash().to_string())
            .unwrap_or_else(|| GENESIS_HASH.to_string())
    }

    fn count(&self) -> usize {
        self.events.len()
    }

    fn flush(&mut self) -> Result<(), StoreError> {
        self.writer.sync()?;
        Ok(())
    }

    fn corrupt_lines(&self) -> &[usize] {
        &self.corrupt_lines
    }

    fn name(&self) -> &'static str {
        "jsonl"
    }
}
