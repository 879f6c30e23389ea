//! Trail event model, signing, and verification for Trailproof.
//!
//! This crate provides:
//! - [`TrailEvent`], the immutable event envelope
//! - Chain linking via canonical hashing (`sha256(prev_hash || canonical(event))`)
//! - Optional HMAC-SHA256 signatures over the same canonical form
//! - Offline chain verification with cascading break detection
//!
//! Core invariants:
//! - Events are immutable, append-only records
//! - The chain hash covers the envelope as first built: trace, session and
//!   signature are not part of it
//! - Verification is deterministic and offline
//!
#![deny(missing_docs)]

/// Canonical form and chain linking.
pub mod chain;
/// Error types for signing and verification.
pub mod errors;
/// Event envelope types.
pub mod events;
/// HMAC signing.
pub mod signer;
/// Chain verification and its result type.
pub mod verification;

pub use chain::{canonical_bytes, canonical_json, link};
pub use errors::SignatureError;
pub use events::{EventEnvelope, Payload, TrailEvent};
pub use signer::{sign, verify_signature, SigningKey, SIGNATURE_PREFIX};
pub use trailproof_canonical::GENESIS_HASH;
pub use verification::{Verifier, VerifyResult};
