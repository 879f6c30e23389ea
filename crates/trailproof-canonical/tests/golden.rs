use proptest::prelude::*;
use serde_json::{json, Map, Value};
use trailproof_canonical::{canonical_value, canonicalize, chain_digest, GENESIS_HASH};

#[test]
fn canonicalizer_produces_ordered_bytes() {
    let value = json!({"b": 1, "a": {"nested": 2, "c": [1, 2]}});
    assert_eq!(
        canonicalize(&value),
        br#"{"a":{"c":[1,2],"nested":2},"b":1}"#.to_vec()
    );
}

#[test]
fn keys_sort_by_code_point() {
    let value = json!({"é": 1, "z": 2, "Z": 3, "日本": 4});
    assert_eq!(
        String::from_utf8(canonicalize(&value)).unwrap(),
        r#"{"Z":3,"z":2,"é":1,"日本":4}"#
    );
}

#[test]
fn chain_digest_matches_reference_vector() {
    let canonical = r#"{"actor_id":"agent-1","event_id":"550e8400-e29b-41d4-a716-446655440000","event_type":"memproof.memory.write","payload":{"key":"value"},"prev_hash":"0000000000000000000000000000000000000000000000000000000000000000","tenant_id":"acme","timestamp":"2025-01-15T10:30:00.000Z"}"#;
    assert_eq!(
        chain_digest(GENESIS_HASH, canonical.as_bytes()),
        "95708174d716c4754bfb4297c85c237e26eab7ce3727ba39c3e34b39ed670b0b"
    );
}

#[test]
fn floats_match_python_repr() {
    let value = json!({"ratio": 1e-7, "big": 1e16, "whole": 2.0, "small": 0.0001});
    assert_eq!(
        String::from_utf8(canonicalize(&value)).unwrap(),
        r#"{"big":1e+16,"ratio":1e-07,"small":0.0001,"whole":2.0}"#
    );
}

fn arb_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| json!(n)),
        "[a-z]{0,6}".prop_map(Value::String),
    ];
    leaf.prop_recursive(4, 32, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::btree_map("[a-zA-Z_]{1,6}", inner, 0..5)
                .prop_map(|m| Value::Object(m.into_iter().collect::<Map<_, _>>())),
        ]
    })
}

fn assert_sorted(value: &Value) {
    match value {
        Value::Object(map) => {
            let keys: Vec<&String> = map.keys().collect();
            let mut sorted = keys.clone();
            sorted.sort();
            assert_eq!(keys, sorted);
            map.values().for_each(assert_sorted);
        }
        Value::Array(items) => items.iter().for_each(assert_sorted),
        _ => {}
    }
}

fn assert_stripped(value: &Value) {
    if let Value::Object(map) = value {
        assert!(!map.contains_key("hash"));
        assert!(!map.contains_key("signature"));
        assert!(map.values().all(|v| !v.is_null()));
        map.values().for_each(assert_stripped);
    }
}

proptest! {
    #[test]
    fn canonical_output_is_deterministic(value in arb_json()) {
        prop_assert_eq!(canonicalize(&value), canonicalize(&value));
    }

    #[test]
    fn keys_ascend_at_every_level(value in arb_json()) {
        let reparsed: Value = serde_json::from_slice(&canonicalize(&value)).unwrap();
        assert_sorted(&canonical_value(&value));
        prop_assert_eq!(reparsed, canonical_value(&value));
    }

    #[test]
    fn excluded_keys_never_survive_in_objects(
        value in arb_json(),
        hash in "[a-f0-9]{4}",
    ) {
        let mut wrapped = Map::new();
        wrapped.insert("hash".into(), json!(hash));
        wrapped.insert("signature".into(), json!("sig"));
        wrapped.insert("inner".into(), value);
        let canonical = canonical_value(&Value::Object(wrapped));
        assert_stripped(&canonical);
    }

    #[test]
    fn float_text_round_trips(x in any::<f64>().prop_filter("finite", |x| x.is_finite())) {
        let text = String::from_utf8(canonicalize(&json!(x))).unwrap();
        let back: f64 = text.parse().unwrap();
        prop_assert_eq!(back.to_bits(), x.to_bits());
        prop_assert!(text.contains('.') || text.contains('e'));
    }
}
