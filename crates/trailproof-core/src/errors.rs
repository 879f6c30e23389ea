use thiserror::Error;

/// Signature failures.
///
/// Chain breaks are not errors; they are reported in
/// [`VerifyResult::broken`](crate::VerifyResult).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SignatureError {
    /// The event carries no signature.
    #[error("missing signature: event has no signature field")]
    Missing,
    /// The signature does not start with `hmac-sha256:`.
    #[error("invalid signature format: expected 'hmac-sha256:' prefix")]
    MalformedPrefix,
    /// The recomputed signature differs from the stored one.
    #[error("signature mismatch: HMAC verification failed")]
    Mismatch,
    /// A signed event was found but no signing key is configured.
    #[error("signature found on event {index} but no signing key configured: cannot verify signature")]
    KeyRequired {
        /// Zero-based position of the signed event.
        index: usize,
    },
    /// The key could not initialize the MAC.
    #[error("invalid signing key: {0}")]
    InvalidKey(String),
}
