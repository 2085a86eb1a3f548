//! Canonical serializer tests: deterministic text for cache keys/signing.

use relaxed_json::{canonicalize, transpile, Error};
use serde::Serialize;
use serde_json::json;
use std::collections::HashMap;

#[test]
fn test_key_order_invariance() {
    let a = canonicalize(&json!({"b": 1, "a": 2})).unwrap();
    let b = canonicalize(&json!({"a": 2, "b": 1})).unwrap();
    assert_eq!(a, b);
    assert_eq!(a, r#"{"a":2,"b":1}"#);
}

#[test]
fn test_nested_sorting_and_no_whitespace() {
    let value = json!({
        "z": {"beta": [1, 2], "alpha": true},
        "a": [{"y": 1, "x": 2}]
    });
    assert_eq!(
        canonicalize(&value).unwrap(),
        r#"{"a":[{"x":2,"y":1}],"z":{"alpha":true,"beta":[1,2]}}"#
    );
}

#[test]
fn test_scalars() {
    assert_eq!(canonicalize(&json!(null)).unwrap(), "null");
    assert_eq!(canonicalize(&json!(true)).unwrap(), "true");
    assert_eq!(canonicalize(&json!(42)).unwrap(), "42");
    assert_eq!(canonicalize(&json!(-7.25)).unwrap(), "-7.25");
    assert_eq!(canonicalize(&json!("text")).unwrap(), r#""text""#);
    assert_eq!(canonicalize(&json!([])).unwrap(), "[]");
    assert_eq!(canonicalize(&json!({})).unwrap(), "{}");
}

#[test]
fn test_non_finite_floats_collapse_to_null() {
    assert_eq!(canonicalize(&f64::NAN).unwrap(), "null");
    assert_eq!(canonicalize(&f64::INFINITY).unwrap(), "null");
    assert_eq!(canonicalize(&f64::NEG_INFINITY).unwrap(), "null");
    assert_eq!(canonicalize(&vec![1.0, f64::NAN]).unwrap(), "[1,null]");
}

#[test]
fn test_struct_fields_sorted() {
    #[derive(Serialize)]
    struct Unsorted {
        zeta: u32,
        alpha: u32,
        mid: &'static str,
    }

    let text = canonicalize(&Unsorted {
        zeta: 1,
        alpha: 2,
        mid: "m",
    })
    .unwrap();
    assert_eq!(text, r#"{"alpha":2,"mid":"m","zeta":1}"#);
}

#[test]
fn test_string_escaping() {
    assert_eq!(
        canonicalize(&json!({"k": "a\"b\\c\nd"})).unwrap(),
        r#"{"k":"a\"b\\c\nd"}"#
    );
}

#[test]
fn test_unstringifiable_map_key() {
    let mut map: HashMap<Vec<u8>, u32> = HashMap::new();
    map.insert(vec![1], 1);
    assert!(matches!(
        canonicalize(&map),
        Err(Error::Unstringifiable(_))
    ));
}

#[test]
fn test_stable_under_reparse() {
    let value = json!({
        "drivers": [{"name": "sales", "values": [1.5, 2.25]}],
        "settings": {"currency": "EUR", "active": true}
    });
    let first = canonicalize(&value).unwrap();
    let reparsed: serde_json::Value = serde_json::from_str(&first).unwrap();
    let second = canonicalize(&reparsed).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_transpile_feeds_canonicalize() {
    // the full pipeline: relaxed text -> strict JSON -> parse -> cache key
    let json = transpile("{z: 1_000, a: ciao, m: 2024-01-01}").unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(
        canonicalize(&value).unwrap(),
        r#"{"a":"ciao","m":"2024-01-01","z":"1000"}"#
    );
}
