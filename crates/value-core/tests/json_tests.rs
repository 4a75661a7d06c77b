//! Tests for the `serde_json` adapter.

use serde_json::json;
use value_core::{from_json, from_json_str, to_json, to_json_string, Kind, Value, ValueError};

#[test]
fn integers_become_int() {
    let v = from_json(&json!(42)).unwrap();
    assert_eq!(v.kind(), Kind::Int);
    assert_eq!(from_json(&json!(-7)).unwrap().as_int(), Some(-7));
}

#[test]
fn fractions_become_float() {
    let v = from_json(&json!(2.5)).unwrap();
    assert_eq!(v.kind(), Kind::Float);
}

#[test]
fn integer_above_i64_max_is_rejected() {
    let err = from_json(&json!(u64::MAX)).unwrap_err();
    assert!(matches!(err, ValueError::IntegerOverflow(n) if n == u64::MAX));
}

#[test]
fn object_member_order_is_preserved() {
    let v = from_json_str(r#"{"z":1,"a":2,"m":3}"#).unwrap();
    let keys: Vec<&str> = v.as_map().unwrap().keys().collect();
    assert_eq!(keys, vec!["z", "a", "m"]);
}

#[test]
fn nested_document() {
    let v = from_json_str(r#"{"list":[1,"two",true,null],"obj":{"k":{}}}"#).unwrap();
    assert_eq!(v.to_string(), r#"{list=[1,"two",true,null];obj={k={}}}"#);
}

#[test]
fn objects_with_different_member_order_are_equal() {
    let a = from_json_str(r#"{"a":1,"b":[1,2]}"#).unwrap();
    let b = from_json_str(r#"{"b":[1,2],"a":1}"#).unwrap();
    assert_eq!(a, b);
}

#[test]
fn invalid_json_is_a_parse_error() {
    let err = from_json_str("{not json").unwrap_err();
    assert!(matches!(err, ValueError::JsonParse(_)));
    assert!(err.to_string().starts_with("JSON parse error"));
}

#[test]
fn to_json_keeps_insertion_order() {
    let v = from_json_str(r#"{"b":1,"a":[2.5,"x",false,null]}"#).unwrap();
    assert_eq!(
        to_json_string(&v).unwrap(),
        r#"{"b":1,"a":[2.5,"x",false,null]}"#
    );
}

#[test]
fn to_json_rejects_non_finite_floats() {
    let err = to_json(&Value::float(f64::INFINITY)).unwrap_err();
    assert!(matches!(err, ValueError::NonFiniteFloat(f) if f.is_infinite()));
    assert!(to_json(&Value::float(f64::NAN)).is_err());
}

#[test]
fn to_json_scalars() {
    assert_eq!(to_json(&Value::int(1)).unwrap(), json!(1));
    assert_eq!(to_json(&Value::string("s")).unwrap(), json!("s"));
    assert_eq!(to_json(&Value::boolean(true)).unwrap(), json!(true));
    assert_eq!(to_json(&Value::Null).unwrap(), json!(null));
}
