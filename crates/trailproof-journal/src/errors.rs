use thiserror::Error;

/// Errors that can occur during journal operations.
#[derive(Error, Debug)]
pub enum JournalError {
    /// I/O error during read or write.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// A record could not be serialized.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
    /// A line could not be decoded in strict mode.
    #[error("corrupt record at line {line}: {reason}")]
    CorruptLine {
        /// Zero-based line index.
        line: usize,
        /// Decoder message.
        reason: String,
    },
}
