//! Journal reader implementation.

use crate::errors::JournalError;
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Read mode for handling corrupt lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReadMode {
    /// Strict mode: a corrupt line is an error.
    Strict,
    /// Permissive mode: corrupt lines are recorded and skipped.
    #[default]
    Permissive,
}

/// Journal reader yielding one record per non-blank line.
///
/// Lines are split on `\n` and trimmed. Blank lines are skipped silently. A
/// line that is not valid UTF-8 or does not decode into `T` is corrupt: in
/// [`ReadMode::Permissive`] its zero-based index is recorded in
/// [`corrupt_lines`](Self::corrupt_lines) and reading continues with the next
/// line.
pub struct JournalReader {
    reader: BufReader<File>,
    path: PathBuf,
    mode: ReadMode,
    line: usize,
    corrupt_lines: Vec<usize>,
}

impl JournalReader {
    /// Opens a journal file for reading.
    ///
    /// # Errors
    ///
    /// Returns [`JournalError::Io`] if the file cannot be opened.
    pub fn open<P: AsRef<Path>>(path: P, mode: ReadMode) -> Result<Self, JournalError> {
        let path = path.as_ref().to_path_buf();
        let file = File::open(&path)?;

        Ok(Self {
            reader: BufReader::new(file),
            path,
            mode,
            line: 0,
            corrupt_lines: Vec::new(),
        })
    }

    /// Number of lines consumed so far.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Indices of corrupt lines skipped so far (permissive mode).
    pub fn corrupt_lines(&self) -> &[usize] {
        &self.corrupt_lines
    }

    /// Reads the next record, or `Ok(None)` at end-of-file.
    ///
    /// # Errors
    ///
    /// Returns [`JournalError`](crate::JournalError) if:
    /// - an I/O error occurs
    /// - a corrupt line is found in strict mode
    pub fn read_record<T: DeserializeOwned>(&mut self) -> Result<Option<T>, JournalError> {
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if self.reader.read_until(b'\n', &mut buf)? == 0 {
                return Ok(None);
            }
            let index = self.line;
            self.line += 1;

            let text = match std::str::from_utf8(&buf) {
                Ok(text) => text.trim(),
                Err(e) => {
                    self.corrupt(index, e.to_string())?;
                    continue;
                }
            };
            if text.is_empty() {
                continue;
            }

            match serde_json::from_str::<T>(text) {
                Ok(record) => return Ok(Some(record)),
                Err(e) => self.corrupt(index, e.to_string())?,
            }
        }
    }

    fn corrupt(&mut self, line: usize, reason: String) -> Result<(), JournalError> {
        match self.mode {
            ReadMode::Strict => Err(JournalError::CorruptLine { line, reason }),
            ReadMode::Permissive => {
                tracing::warn!(
                    line,
                    path = %self.path.display(),
                    %reason,
                    "skipping corrupt journal line"
                );
                self.corrupt_lines.push(line);
                Ok(())
            }
        }
    }
}

/// Records recovered from a journal file.
#[derive(Debug, Clone, PartialEq)]
pub struct Replay<T> {
    /// Decoded records in file order.
    pub records: Vec<T>,
    /// Zero-based indices of lines that were skipped as corrupt.
    pub corrupt_lines: Vec<usize>,
}

impl<T> Default for Replay<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            corrupt_lines: Vec::new(),
        }
    }
}

/// Reads every record of a journal. A missing file replays as empty.
pub fn replay<T: DeserializeOwned, P: AsRef<Path>>(
    path: P,
    mode: ReadMode,
) -> Result<Replay<T>, JournalError> {
    let mut reader = match JournalReader::open(path, mode) {
        Ok(reader) => reader,
        Err(JournalError::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
            return Ok(Replay::default())
        }
        Err(e) => return Err(e),
    };

    let mut records = Vec::new();
    while let Some(record) = reader.read_record()? {
        records.push(record);
    }

    Ok(Replay {
        records,
        corrupt_lines: reader.corrupt_lines,
    })
}
