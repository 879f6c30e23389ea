//! HMAC-SHA256 event signing.
//!
//! The signature covers the same canonical form as the chain hash, but the
//! finalized event includes its trace and session ids, so those are
//! authenticated only by the signature.

use crate::chain::canonical_bytes;
use crate::errors::SignatureError;
use crate::events::TrailEvent;
use hmac::{Hmac, Mac};
use serde::Deserialize;
use sha2::Sha256;
use std::fmt;
use subtle::ConstantTimeEq;

type HmacSha256 = Hmac<Sha256>;

/// Prefix identifying the signature algorithm.
pub const SIGNATURE_PREFIX: &str = "hmac-sha256:";

/// Secret HMAC key. `Debug` output never shows the key material.
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub struct SigningKey(Vec<u8>);

impl SigningKey {
    /// Raw key bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SigningKey(<redacted>)")
    }
}

impl From<&str> for SigningKey {
    fn from(value: &str) -> Self {
        Self(value.as_bytes().to_vec())
    }
}

impl From<String> for SigningKey {
    fn from(value: String) -> Self {
        Self(value.into_bytes())
    }
}

impl From<Vec<u8>> for SigningKey {
    fn from(value: Vec<u8>) -> Self {
        Self(value)
    }
}

/// Computes `hmac-sha256:<hex>` over the canonical form of `event`.
pub fn sign(key: &SigningKey, event: &TrailEvent) -> Result<String, SignatureError> {
    let mut mac = HmacSha256::new_from_slice(key.as_bytes())
        .map_err(|e| SignatureError::InvalidKey(e.to_string()))?;
    mac.update(&canonical_bytes(event));
    Ok(format!(
        "{}{}",
        SIGNATURE_PREFIX,
        hex::encode(mac.finalize().into_bytes())
    ))
}

/// Verifies the signature carried by `event`.
///
/// # Errors
///
/// - [`SignatureError::Missing`] if the event is unsigned
/// - [`SignatureError::MalformedPrefix`] if the prefix is not `hmac-sha256:`
/// - [`SignatureError::Mismatch`] if the constant-time comparison fails
pub fn verify_signature(key: &SigningKey, event: &TrailEvent) -> Result<(), SignatureError> {
    let stored = event.signature().ok_or(SignatureError::Missing)?;
    if !stored.starts_with(SIGNATURE_PREFIX) {
        return Err(SignatureError::MalformedPrefix);
    }

    let expected = sign(key, event)?;
    if bool::from(expected.as_bytes().ct_eq(stored.as_bytes())) {
        Ok(())
    } else {
        Err(SignatureError::Mismatch)
    }
}
