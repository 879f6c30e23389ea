use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Opaque, domain-specific event data.
pub type Payload = Map<String, Value>;

/// Fields supplied when an event is first built, before it is hashed.
#[derive(Debug, Clone, PartialEq)]
pub struct EventEnvelope {
    /// Random UUIDv4 string.
    pub event_id: String,
    /// Namespaced event type (e.g. `memproof.memory.write`).
    pub event_type: String,
    /// Fixed-width UTC timestamp (`YYYY-MM-DDTHH:MM:SS.mmmZ`).
    pub timestamp: String,
    /// Who performed the action.
    pub actor_id: String,
    /// Tenant isolation key.
    pub tenant_id: String,
    /// Domain data, stored opaquely.
    pub payload: Payload,
    /// Hash of the predecessor, or the genesis sentinel.
    pub prev_hash: String,
}

/// A single event in the audit trail.
///
/// Events are values: there are no setters, and every step of construction
/// (`provisional` → `sealed` → `signed`) yields a new event. Serialization
/// always writes every field, including `null` optionals, in envelope order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TrailEvent {
    event_id: String,
    event_type: String,
    timestamp: String,
    actor_id: String,
    tenant_id: String,
    payload: Payload,
    prev_hash: String,
    hash: String,
    #[serde(default)]
    trace_id: Option<String>,
    #[serde(default)]
    session_id: Option<String>,
    #[serde(default)]
    signature: Option<String>,
}

impl TrailEvent {
    /// Builds the provisional event that is hashed: empty hash, no
    /// trace/session/signature.
    pub fn provisional(envelope: EventEnvelope) -> Self {
        Self {
            event_id: envelope.event_id,
            event_type: envelope.event_type,
            timestamp: envelope.timestamp,
            actor_id: envelope.actor_id,
            tenant_id: envelope.tenant_id,
            payload: envelope.payload,
            prev_hash: envelope.prev_hash,
            hash: String::new(),
            trace_id: None,
            session_id: None,
            signature: None,
        }
    }

    /// Returns the finalized event carrying its chain hash and correlation ids.
    pub fn sealed(self, hash: String, trace_id: Option<String>, session_id: Option<String>) -> Self {
        Self {
            hash,
            trace_id,
            session_id,
            signature: None,
            ..self
        }
    }

    /// Returns a copy of this event carrying `signature`.
    pub fn signed(self, signature: String) -> Self {
        Self {
            signature: Some(signature),
            ..self
        }
    }

    /// Reconstructs the provisional form this event was hashed from.
    pub fn hash_input(&self) -> Self {
        Self::provisional(EventEnvelope {
            event_id: self.event_id.clone(),
            event_type: self.event_type.clone(),
            timestamp: self.timestamp.clone(),
            actor_id: self.actor_id.clone(),
            tenant_id: self.tenant_id.clone(),
            payload: self.payload.clone(),
            prev_hash: self.prev_hash.clone(),
        })
    }

    /// Full envelope as a JSON object, optionals included as `null`.
    pub fn to_value(&self) -> Value {
        let mut map = Map::new();
        map.insert("event_id".into(), Value::String(self.event_id.clone()));
        map.insert("event_type".into(), Value::String(self.event_type.clone()));
        map.insert("timestamp".into(), Value::String(self.timestamp.clone()));
        map.insert("actor_id".into(), Value::String(self.actor_id.clone()));
        map.insert("tenant_id".into(), Value::String(self.tenant_id.clone()));
        map.insert("payload".into(), Value::Object(self.payload.clone()));
        map.insert("prev_hash".into(), Value::String(self.prev_hash.clone()));
        map.insert("hash".into(), Value::String(self.hash.clone()));
        map.insert("trace_id".into(), optional(&self.trace_id));
        map.insert("session_id".into(), optional(&self.session_id));
        map.insert("signature".into(), optional(&self.signature));
        Value::Object(map)
    }

    /// Event id (UUIDv4).
    pub fn event_id(&self) -> &str {
        &self.event_id
    }

    /// Namespaced event type.
    pub fn event_type(&self) -> &str {
        &self.event_type
    }

    /// Fixed-width UTC timestamp.
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// Actor id.
    pub fn actor_id(&self) -> &str {
        &self.actor_id
    }

    /// Tenant id.
    pub fn tenant_id(&self) -> &str {
        &self.tenant_id
    }

    /// Domain payload.
    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    /// Predecessor hash.
    pub fn prev_hash(&self) -> &str {
        &self.prev_hash
    }

    /// Chain hash of this event.
    pub fn hash(&self) -> &str {
        &self.hash
    }

    /// Cross-system correlation id, if any.
    pub fn trace_id(&self) -> Option<&str> {
        self.trace_id.as_deref()
    }

    /// Session grouping id, if any.
    pub fn session_id(&self) -> Option<&str> {
        self.session_id.as_deref()
    }

    /// `hmac-sha256:<hex>` signature, if the event was signed.
    pub fn signature(&self) -> Option<&str> {
        self.signature.as_deref()
    }
}

fn optional(value: &Option<String>) -> Value {
    value.clone().map(Value::String).unwrap_or(Value::Null)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn envelope() -> EventEnvelope {
        EventEnvelope {
            event_id: "evt-001".into(),
            event_type: "test.event".into(),
            timestamp: "2025-01-01T00:00:00.000Z".into(),
            actor_id: "actor-1".into(),
            tenant_id: "tenant-1".into(),
            payload: json!({"key": "value"}).as_object().cloned().unwrap(),
            prev_hash: trailproof_canonical::GENESIS_HASH.into(),
        }
    }

    #[test]
    fn serialization_keeps_envelope_order_and_nulls() {
        let event = TrailEvent::provisional(envelope()).sealed("abc".into(), None, None);
        let line = serde_json::to_string(&event).unwrap();
        assert!(line.starts_with(r#"{"event_id":"evt-001","event_type":"test.event""#));
        assert!(line.ends_with(r#""hash":"abc","trace_id":null,"session_id":null,"signature":null}"#));
        assert_eq!(serde_json::to_value(&event).unwrap(), event.to_value());
    }

    #[test]
    fn optionals_may_be_omitted_on_read() {
        let value = json!({
            "event_id": "e", "event_type": "t", "timestamp": "ts", "actor_id": "a",
            "tenant_id": "t", "payload": {}, "prev_hash": "p", "hash": "h"
        });
        let event: TrailEvent = serde_json::from_value(value).unwrap();
        assert_eq!(event.trace_id(), None);
        assert_eq!(event.signature(), None);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let mut value = TrailEvent::provisional(envelope()).to_value();
        value["extra"] = json!(1);
        assert!(serde_json::from_value::<TrailEvent>(value).is_err());
    }

    #[test]
    fn hash_input_drops_hash_and_optionals() {
        let event = TrailEvent::provisional(envelope())
            .sealed("abc".into(), Some("trace".into()), Some("sess".into()))
            .signed("hmac-sha256:00".into());
        let input = event.hash_input();
        assert_eq!(input.hash(), "");
        assert_eq!(input.trace_id(), None);
        assert_eq!(input.session_id(), None);
        assert_eq!(input.signature(), None);
        assert_eq!(input, TrailEvent::provisional(envelope()));
    }
}
