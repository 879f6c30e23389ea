//! Error types for store operations.

use thiserror::Error;

/// Errors that can occur during store operations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Journal backend error.
    #[error("journal error: {0}")]
    Journal(#[from] trailproof_journal::JournalError),
}
