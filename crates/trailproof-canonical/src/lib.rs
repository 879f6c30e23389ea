//! Canonical serialization and hash-chain primitives for Trailproof trails.
//!
//! Every byte that participates in hashing or signing is produced by this
//! crate. The rules are fixed so that independent implementations reproduce
//! the same digests:
//! - `hash` and `signature` keys are dropped at every object level
//! - null-valued object members are dropped at every object level
//! - object keys are sorted by code point; array order is preserved
//! - compact UTF-8 output, non-ASCII characters emitted literally
//!
#![deny(missing_docs)]

/// Canonical JSON encoding used as hashing and signing input.
pub mod canonicalizer;
/// SHA-256 chain digests and the genesis sentinel.
pub mod digest;
/// Validated identifier newtypes.
pub mod identifiers;
/// Validation errors shared across the workspace.
pub mod validation;

pub use canonicalizer::{canonicalize, canonical_value, EXCLUDED_FIELDS};
pub use digest::{chain_digest, is_chain_digest, GENESIS_HASH};
pub use identifiers::Timestamp;
pub use validation::ValidationError;
