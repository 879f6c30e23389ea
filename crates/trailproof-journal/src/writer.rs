//! Journal writer implementation.

use crate::errors::JournalError;
use serde::Serialize;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Options for journal writing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriteOptions {
    /// Whether to fsync after each append (default: false).
    pub sync: bool,
}

/// Journal writer for append-only record storage.
///
/// Each record is written as one compact JSON object followed by `\n`. The
/// writer holds no descriptor between calls: every append opens the file,
/// writes one line and closes it again.
///
/// On the first append the file is created exclusively (`O_EXCL`) with
/// owner-only read/write permissions. If another process created the file in
/// the meantime the append fails instead of writing into a file it does not
/// own.
///
/// # Example
///
/// ```rust
/// use trailproof_journal::{JournalWriter, WriteOptions};
/// use serde_json::json;
///
/// let dir = tempfile::tempdir()?;
/// let writer = JournalWriter::new(dir.path().join("trail.jsonl"), WriteOptions::default());
/// writer.append(&json!({"event_id": "evt-001"}))?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct JournalWriter {
    path: PathBuf,
    options: WriteOptions,
}

impl JournalWriter {
    /// Creates a writer for `path`. Nothing is touched on disk until the
    /// first append.
    pub fn new<P: Into<PathBuf>>(path: P, options: WriteOptions) -> Self {
        Self {
            path: path.into(),
            options,
        }
    }

    /// Journal file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends one record as a single line.
    ///
    /// # Errors
    ///
    /// Returns [`JournalError`](crate::JournalError) if:
    /// - the record cannot be serialized
    /// - the file cannot be created or opened
    /// - the write (or fsync, with `sync`) fails
    pub fn append<T: Serialize>(&self, record: &T) -> Result<(), JournalError> {
        let mut line = serde_json::to_vec(record)?;
        line.push(b'\n');

        let mut file = self.open_for_append()?;
        // One write per record so a line is never interleaved with itself.
        file.write_all(&line)?;
        file.flush()?;

        if self.options.sync {
            file.sync_all()?;
        }

        Ok(())
    }

    /// Flushes the journal to stable storage. A journal that was never
    /// written is a no-op.
    pub fn sync(&self) -> Result<(), JournalError> {
        match OpenOptions::new().append(true).open(&self.path) {
            Ok(file) => {
                file.sync_all()?;
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn open_for_append(&self) -> io::Result<File> {
        if self.path.exists() {
            OpenOptions::new().append(true).open(&self.path)
        } else {
            create_exclusive(&self.path)
        }
    }
}

#[cfg(unix)]
fn create_exclusive(path: &Path) -> io::Result<File> {
    use std::os::unix::fs::OpenOptionsExt;

    OpenOptions::new()
        .write(true)
        .create_new(true)
        .mode(0o600)
        .open(path)
}

#[cfg(not(unix))]
fn create_exclusive(path: &Path) -> io::Result<File> {
    OpenOptions::new().write(true).create_new(true).open(path)
}
