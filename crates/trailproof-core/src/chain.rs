//! Canonical form of trail events and chain linking.

use crate::events::TrailEvent;
use trailproof_canonical::{canonicalize, chain_digest};

/// Canonical JSON text of an event, as hashed and signed.
pub fn canonical_json(event: &TrailEvent) -> String {
    String::from_utf8_lossy(&canonical_bytes(event)).into_owned()
}

/// Canonical UTF-8 bytes of an event.
pub fn canonical_bytes(event: &TrailEvent) -> Vec<u8> {
    canonicalize(&event.to_value())
}

/// Chain hash of `event` linked to `prev_hash`:
/// `sha256(prev_hash || canonical(event))` as lowercase hex.
pub fn link(prev_hash: &str, event: &TrailEvent) -> String {
    chain_digest(prev_hash, &canonical_bytes(event))
}
