use sha2::{Digest, Sha256};

/// Sentinel hash for "no predecessor": 64 zero characters.
///
/// Used as the `prev_hash` of the first event and as the last hash of an
/// empty trail.
pub const GENESIS_HASH: &str = "0000000000000000000000000000000000000000000000000000000000000000";

/// Computes a chain link: `hex(sha256(prev_hash || canonical_bytes))`.
///
/// The predecessor hash is hashed as its UTF-8 string form, not as decoded
/// bytes. Output is always 64 lowercase hex characters.
pub fn chain_digest(prev_hash: &str, canonical_bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(prev_hash.as_bytes());
    hasher.update(canonical_bytes);
    hex::encode(hasher.finalize())
}

/// Returns true if `value` has the shape of a chain digest.
pub fn is_chain_digest(value: &str) -> bool {
    value.len() == 64
        && value
            .bytes()
            .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
}
