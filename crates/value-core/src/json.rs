//! Conversion between [`Value`] and `serde_json::Value`.
//!
//! Decoding text is left to serde_json; this module only maps one tree onto
//! the other. Object member order is preserved in both directions
//! (serde_json is built with `preserve_order`).
//!
//! # Example
//! ```
//! use value_core::{from_json_str, to_json_string, Value};
//!
//! let value = from_json_str(r#"{"b":[1,2.5],"a":null}"#).unwrap();
//! assert_eq!(value.to_string(), "{b=[1,2.5];a=null}");
//! assert_eq!(to_json_string(&value).unwrap(), r#"{"b":[1,2.5],"a":null}"#);
//! ```

use serde_json::{Map as JsonMap, Number};

use crate::error::{Result, ValueError};
use crate::list::List;
use crate::map::Map;
use crate::value::Value;

/// Convert a JSON tree into a [`Value`].
///
/// Integers that fit `i64` become `Int`, other numbers become `Float`.
/// Integers above `i64::MAX` are rejected rather than silently rounded.
pub fn from_json(json: &serde_json::Value) -> Result<Value> {
    Ok(match json {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Boolean(*b),
        serde_json::Value::Number(n) => number_to_value(n)?,
        serde_json::Value::String(s) => Value::String(s.clone()),
        serde_json::Value::Array(arr) => Value::List(
            arr.iter()
                .map(from_json)
                .collect::<Result<List>>()?,
        ),
        serde_json::Value::Object(obj) => Value::Map(
            obj.iter()
                .map(|(key, child)| from_json(child).map(|value| (key.clone(), value)))
                .collect::<Result<Map>>()?,
        ),
    })
}

/// Parse a JSON document and convert it into a [`Value`].
pub fn from_json_str(json: &str) -> Result<Value> {
    let parsed: serde_json::Value = serde_json::from_str(json)?;
    from_json(&parsed)
}

/// Convert a [`Value`] into a JSON tree. Fails on NaN and infinities.
pub fn to_json(value: &Value) -> Result<serde_json::Value> {
    Ok(match value {
        Value::Float(f) => Number::from_f64(*f)
            .map(serde_json::Value::Number)
            .ok_or(ValueError::NonFiniteFloat(*f))?,
        Value::Int(i) => serde_json::Value::Number(Number::from(*i)),
        Value::String(s) => serde_json::Value::String(s.clone()),
        Value::Boolean(b) => serde_json::Value::Bool(*b),
        Value::List(list) => serde_json::Value::Array(
            list.iter().map(to_json).collect::<Result<Vec<_>>>()?,
        ),
        Value::Map(map) => {
            let mut obj = JsonMap::new();
            for field in map {
                obj.insert(field.name.clone(), to_json(&field.value)?);
            }
            serde_json::Value::Object(obj)
        }
        Value::Null => serde_json::Value::Null,
    })
}

/// Convert a [`Value`] into compact JSON text.
pub fn to_json_string(value: &Value) -> Result<String> {
    Ok(serde_json::to_string(&to_json(value)?)?)
}

fn number_to_value(n: &Number) -> Result<Value> {
    if let Some(i) = n.as_i64() {
        return Ok(Value::Int(i));
    }
    if let Some(u) = n.as_u64() {
        return Err(ValueError::IntegerOverflow(u));
    }
    // Without `arbitrary_precision` every non-integer JSON number is an f64.
    Ok(Value::Float(n.as_f64().unwrap_or(f64::NAN)))
}
