//! The `Trailproof` facade.

use crate::config::{StoreKind, TrailproofConfig};
use crate::error::TrailproofError;
use serde_json::Value;
use trailproof_canonical::{Timestamp, ValidationError};
use trailproof_core::{
    link, sign, EventEnvelope, SigningKey, TrailEvent, Verifier, VerifyResult,
};
use trailproof_store::{
    JsonlStore, MemoryStore, QueryFilters, QueryResult, ReadMode, TrailStore, WriteOptions,
};
use uuid::Uuid;

/// Upper bound on events returned by [`Trailproof::get_trace`].
pub const TRACE_LIMIT: usize = 10_000;

/// Input to [`Trailproof::emit`].
///
/// `payload` is required and must be a JSON object. An empty or absent
/// `tenant_id` falls back to the configured default tenant.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmitRequest {
    /// Namespaced event type.
    pub event_type: String,
    /// Who performed the action.
    pub actor_id: String,
    /// Domain data.
    pub payload: Option<Value>,
    /// Tenant isolation key.
    pub tenant_id: Option<String>,
    /// Cross-system correlation id.
    pub trace_id: Option<String>,
    /// Session grouping id.
    pub session_id: Option<String>,
}

impl EmitRequest {
    /// Request with the required fields set.
    pub fn new(event_type: impl Into<String>, actor_id: impl Into<String>, payload: Value) -> Self {
        Self {
            event_type: event_type.into(),
            actor_id: actor_id.into(),
            payload: Some(payload),
            ..Self::default()
        }
    }

    /// Sets the tenant.
    pub fn tenant_id(mut self, tenant_id: impl Into<String>) -> Self {
        self.tenant_id = Some(tenant_id.into());
        self
    }

    /// Sets the trace id.
    pub fn trace_id(mut self, trace_id: impl Into<String>) -> Self {
        self.trace_id = Some(trace_id.into());
        self
    }

    /// Sets the session id.
    pub fn session_id(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = Some(session_id.into());
        self
    }
}

/// Tamper-evident audit trail.
///
/// Owns one storage backend and, optionally, a signing key. Every emitted
/// event is linked to its predecessor by hash; with a key it is also signed.
/// [`verify`](Self::verify) walks the stored trail and reports which events
/// can no longer be trusted.
///
/// ```rust
/// use serde_json::json;
/// use trailproof::{EmitRequest, Trailproof, TrailproofConfig};
///
/// let mut trail = Trailproof::new(TrailproofConfig::memory().with_default_tenant("acme"))?;
/// trail.emit(EmitRequest::new("memproof.memory.write", "agent-1", json!({"key": "value"})))?;
///
/// let result = trail.verify()?;
/// assert!(result.intact);
/// assert_eq!(result.total, 1);
/// # Ok::<(), trailproof::TrailproofError>(())
/// ```
pub struct Trailproof {
    store: Box<dyn TrailStore>,
    signing_key: Option<SigningKey>,
    default_tenant_id: Option<String>,
}

impl Trailproof {
    /// Builds the backend named by `config`.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::MissingStorePath`] for a JSONL backend without a path
    /// - [`StoreError`](trailproof_store::StoreError) if an existing journal cannot be read
    pub fn new(config: TrailproofConfig) -> Result<Self, TrailproofError> {
        let store: Box<dyn TrailStore> = match config.store {
            StoreKind::Memory => Box::new(MemoryStore::new()),
            StoreKind::Jsonl => {
                let path = config
                    .path
                    .as_ref()
                    .ok_or(ValidationError::MissingStorePath)?;
                let options = WriteOptions { sync: config.sync };
                Box::new(JsonlStore::open_with(path, ReadMode::Permissive, options)?)
            }
        };

        Ok(Self::with_store(store, config))
    }

    /// Uses an already constructed backend. `config.store`, `config.path` and
    /// `config.sync` are ignored.
    pub fn with_store(store: Box<dyn TrailStore>, config: TrailproofConfig) -> Self {
        tracing::debug!(
            backend = store.name(),
            events = store.count(),
            signed = config.signing_key.is_some(),
            "trailproof ready"
        );

        Self {
            store,
            signing_key: config.signing_key,
            default_tenant_id: config.default_tenant_id,
        }
    }

    /// Records a new event and returns it as persisted.
    ///
    /// # Errors
    ///
    /// - [`ValidationError`] naming the first missing field among
    ///   `event_type`, `actor_id`, `tenant_id`, `payload`, or a payload
    ///   that is not an object; nothing is appended
    /// - [`StoreError`](trailproof_store::StoreError) if the append fails
    pub fn emit(&mut self, request: EmitRequest) -> Result<TrailEvent, TrailproofError> {
        let tenant_id = request
            .tenant_id
            .filter(|t| !t.is_empty())
            .or_else(|| self.default_tenant_id.clone());

        require("event_type", &request.event_type)?;
        require("actor_id", &request.actor_id)?;
        let tenant_id = match tenant_id {
            Some(t) if !t.is_empty() => t,
            _ => return Err(ValidationError::MissingField { field: "tenant_id" }.into()),
        };
        let payload = match request.payload {
            None | Some(Value::Null) => {
                return Err(ValidationError::MissingField { field: "payload" }.into())
            }
            Some(Value::Object(map)) => map,
            Some(other) => {
                return Err(ValidationError::PayloadNotObject {
                    kind: json_kind(&other),
                }
                .into())
            }
        };

        let prev_hash = self.store.last_hash();
        let provisional = TrailEvent::provisional(EventEnvelope {
            event_id: Uuid::new_v4().to_string(),
            event_type: request.event_type,
            timestamp: Timestamp::now().into_string(),
            actor_id: request.actor_id,
            tenant_id,
            payload,
            prev_hash: prev_hash.clone(),
        });
        let hash = link(&prev_hash, &provisional);
        let mut event = provisional.sealed(hash, request.trace_id, request.session_id);

        if let Some(ref key) = self.signing_key {
            let signature = sign(key, &event)?;
            event = event.signed(signature);
        }

        self.store.append(event.clone())?;

        tracing::debug!(
            event_id = event.event_id(),
            event_type = event.event_type(),
            hash = event.hash(),
            "emitted event"
        );

        Ok(event)
    }

    /// One page of events matching `filters`.
    ///
    /// Time bounds are compared as strings, so a date prefix such as
    /// `2025-01-15` works as a lower bound.
    pub fn query(&self, filters: &QueryFilters) -> QueryResult {
        self.store.query(filters)
    }

    /// Every event of one trace, ordered by timestamp (ties keep insertion order).
    pub fn get_trace(&self, trace_id: &str) -> Vec<TrailEvent> {
        let filters = QueryFilters::new().trace_id(trace_id).limit(TRACE_LIMIT);
        let mut events = self.store.query(&filters).events;
        events.sort_by(|a, b| a.timestamp().cmp(b.timestamp()));
        events
    }

    /// Verifies the whole stored chain, and signatures when a key is set.
    ///
    /// # Errors
    ///
    /// Returns [`SignatureError::KeyRequired`](trailproof_core::SignatureError::KeyRequired)
    /// if a signed event is reached and no key is configured.
    pub fn verify(&self) -> Result<VerifyResult, TrailproofError> {
        let events = self.store.read_all();
        let result = Verifier::new(self.signing_key.as_ref()).verify_chain(&events)?;

        if result.intact {
            tracing::info!(total = result.total, "trail intact");
        } else {
            tracing::info!(
                total = result.total,
                first_broken = result.broken.first().copied(),
                broken = result.broken.len(),
                "trail broken"
            );
        }

        Ok(result)
    }

    /// Durability barrier for the backend.
    pub fn flush(&mut self) -> Result<(), TrailproofError> {
        self.store.flush()?;
        Ok(())
    }

    /// Number of stored events.
    pub fn count(&self) -> usize {
        self.store.count()
    }

    /// Hash the next event will link to.
    pub fn last_hash(&self) -> String {
        self.store.last_hash()
    }

    /// Lines skipped while recovering a journal. Always empty for memory.
    pub fn corrupt_lines(&self) -> &[usize] {
        self.store.corrupt_lines()
    }
}

fn require(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::MissingField { field });
    }
    Ok(())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
