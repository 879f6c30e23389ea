//! Tamper-evident, append-only audit trail.
//!
//! Every event is hash-linked to its predecessor; mutating, removing or
//! reordering a persisted event breaks the chain from that point on and
//! [`Trailproof::verify`] reports it. An optional HMAC key adds authenticity.
//!
//! ## Key Types
//!
//! - [`Trailproof`] - emit, query, trace and verify
//! - [`TrailproofConfig`] - backend and key selection
//! - [`EmitRequest`] - input to `emit`
//! - [`TrailproofError`] - unified error
//!
//! The building blocks are re-exported for callers that need them directly.

#![deny(missing_docs)]

/// Facade configuration.
pub mod config;
/// Unified error type.
pub mod error;
/// Facade implementation.
pub mod trail;

pub use config::{StoreKind, TrailproofConfig};
pub use error::TrailproofError;
pub use trail::{EmitRequest, Trailproof, TRACE_LIMIT};

pub use trailproof_canonical::{canonicalize, Timestamp, ValidationError, GENESIS_HASH};
pub use trailproof_core::{SignatureError, SigningKey, TrailEvent, VerifyResult};
pub use trailproof_store::{
    JsonlStore, MemoryStore, QueryFilters, QueryResult, StoreError, TrailStore, DEFAULT_LIMIT,
};
