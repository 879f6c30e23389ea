//! Facade configuration.

use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use trailproof_canonical::ValidationError;
use trailproof_core::SigningKey;

/// Storage backend selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreKind {
    /// Volatile, in-process backend.
    #[default]
    Memory,
    /// Append-only JSONL file.
    Jsonl,
}

impl FromStr for StoreKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "memory" => Ok(StoreKind::Memory),
            "jsonl" => Ok(StoreKind::Jsonl),
            other => Err(ValidationError::UnsupportedStore {
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for StoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreKind::Memory => f.write_str("memory"),
            StoreKind::Jsonl => f.write_str("jsonl"),
        }
    }
}

/// Settings for building a [`Trailproof`](crate::Trailproof).
///
/// The default is a memory backend with no signing key and no default
/// tenant. `path` is required when `store` is [`StoreKind::Jsonl`].
///
/// ```rust
/// use trailproof::{StoreKind, TrailproofConfig};
///
/// let config = TrailproofConfig::jsonl("/var/lib/app/trail.jsonl")
///     .with_signing_key("secret")
///     .with_default_tenant("acme");
/// assert_eq!(config.store, StoreKind::Jsonl);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TrailproofConfig {
    /// Backend selector.
    pub store: StoreKind,
    /// Journal file for the JSONL backend.
    pub path: Option<PathBuf>,
    /// HMAC key; when set, emitted events are signed and verified.
    pub signing_key: Option<SigningKey>,
    /// Tenant used when `emit` is called without one.
    pub default_tenant_id: Option<String>,
    /// Fsync the journal after every append.
    pub sync: bool,
}

impl TrailproofConfig {
    /// Memory backend.
    pub fn memory() -> Self {
        Self::default()
    }

    /// JSONL backend at `path`.
    pub fn jsonl(path: impl Into<PathBuf>) -> Self {
        Self {
            store: StoreKind::Jsonl,
            path: Some(path.into()),
            ..Self::default()
        }
    }

    /// Sets the signing key.
    pub fn with_signing_key(mut self, key: impl Into<SigningKey>) -> Self {
        self.signing_key = Some(key.into());
        self
    }

    /// Sets the default tenant.
    pub fn with_default_tenant(mut self, tenant_id: impl Into<String>) -> Self {
        self.default_tenant_id = Some(tenant_id.into());
        self
    }

    /// Enables fsync after every append.
    pub fn with_sync(mut self, sync: bool) -> Self {
        self.sync = sync;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_kind_parses() {
        assert_eq!("memory".parse::<StoreKind>(), Ok(StoreKind::Memory));
        assert_eq!("jsonl".parse::<StoreKind>(), Ok(StoreKind::Jsonl));
        assert_eq!(
            "sqlite".parse::<StoreKind>(),
            Err(ValidationError::UnsupportedStore {
                value: "sqlite".to_string()
            })
        );
    }

    #[test]
    fn deserializes_with_defaults() {
        let config: TrailproofConfig =
            serde_json::from_str(r#"{"store":"jsonl","path":"trail.jsonl","signing_key":"k"}"#)
                .unwrap();
        assert_eq!(config.store, StoreKind::Jsonl);
        assert_eq!(config.path, Some(PathBuf::from("trail.jsonl")));
        assert_eq!(config.signing_key, Some(SigningKey::from("k")));
        assert_eq!(config.default_tenant_id, None);
        assert!(!config.sync);
    }

    #[test]
    fn debug_does_not_leak_key() {
        let config = TrailproofConfig::memory().with_signing_key("super-secret");
        assert!(!format!("{:?}", config).contains("super-secret"));
    }
}
