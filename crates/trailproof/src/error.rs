//! Unified error type for facade operations.

use thiserror::Error;
use trailproof_canonical::ValidationError;
use trailproof_core::SignatureError;
use trailproof_store::StoreError;

/// Any failure of a [`Trailproof`](crate::Trailproof) call.
///
/// Chain breaks are not errors; they are reported by
/// [`VerifyResult`](trailproof_core::VerifyResult).
#[derive(Error, Debug)]
pub enum TrailproofError {
    /// Rejected input or configuration.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
    /// Storage backend failure.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
    /// Signature could not be produced or checked.
    #[error("signature error: {0}")]
    Signature(#[from] SignatureError),
}
