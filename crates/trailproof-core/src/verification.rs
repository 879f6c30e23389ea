use crate::chain::link;
use crate::errors::SignatureError;
use crate::events::TrailEvent;
use crate::signer::{verify_signature, SigningKey};
use serde::{Deserialize, Serialize};
use trailproof_canonical::GENESIS_HASH;

/// Outcome of walking a trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyResult {
    /// True when no event is broken.
    pub intact: bool,
    /// Number of events walked.
    pub total: usize,
    /// Ascending indices of broken events.
    #[serde(default)]
    pub broken: Vec<usize>,
}

impl VerifyResult {
    /// Result for an empty trail.
    pub fn empty() -> Self {
        Self {
            intact: true,
            total: 0,
            broken: Vec::new(),
        }
    }
}

/// Walk state: either still linked to a trusted predecessor, or broken.
enum Walk {
    Linked { expected_prev: String },
    Broken,
}

/// Offline chain verifier.
///
/// Once an event fails, every later event is reported broken as well: its
/// expected predecessor can no longer be trusted.
pub struct Verifier<'a> {
    key: Option<&'a SigningKey>,
}

impl<'a> Verifier<'a> {
    /// Creates a verifier. With `key`, signed events also have their
    /// signatures checked.
    pub fn new(key: Option<&'a SigningKey>) -> Self {
        Self { key }
    }

    /// Verifies an ordered trail.
    ///
    /// # Errors
    ///
    /// Returns [`SignatureError::KeyRequired`] when a signed event is reached
    /// and no key is configured; a signed trail cannot be assessed without it.
    pub fn verify_chain(&self, events: &[TrailEvent]) -> Result<VerifyResult, SignatureError> {
        let mut broken = Vec::new();
        let mut state = Walk::Linked {
            expected_prev: GENESIS_HASH.to_string(),
        };

        for (index, event) in events.iter().enumerate() {
            state = match state {
                Walk::Broken => {
                    broken.push(index);
                    Walk::Broken
                }
                Walk::Linked { expected_prev } => {
                    if event.signature().is_some() && self.key.is_none() {
                        return Err(SignatureError::KeyRequired { index });
                    }

                    if self.links_to(&expected_prev, event) && self.is_authentic(event) {
                        Walk::Linked {
                            expected_prev: event.hash().to_string(),
                        }
                    } else {
                        tracing::debug!(index, event_id = event.event_id(), "chain break");
                        broken.push(index);
                        Walk::Broken
                    }
                }
            };
        }

        Ok(VerifyResult {
            intact: broken.is_empty(),
            total: events.len(),
            broken,
        })
    }

    fn links_to(&self, expected_prev: &str, event: &TrailEvent) -> bool {
        event.prev_hash() == expected_prev && link(expected_prev, &event.hash_input()) == event.hash()
    }

    fn is_authentic(&self, event: &TrailEvent) -> bool {
        match (self.key, event.signature()) {
            (Some(key), Some(_)) => verify_signature(key, event).is_ok(),
            _ => true,
        }
    }
}
