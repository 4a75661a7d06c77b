//! Debug rendering.
//!
//! Numbers and booleans use their natural text form (floats switch to
//! exponent notation for very large or very small magnitudes), strings are quoted and
//! escaped, lists render as `[a,b]` and maps as `{k=v;k2=v2}` in insertion
//! order. This is a display helper, not a canonical or stable format.

use std::fmt::{self, Write};

use crate::value::Value;

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Float(x) => write_float(f, *x),
            Value::Int(i) => write!(f, "{i}"),
            Value::String(s) => write!(f, "{s:?}"),
            Value::Boolean(b) => write!(f, "{b}"),
            Value::List(list) => {
                f.write_char('[')?;
                for (i, item) in list.iter().enumerate() {
                    if i > 0 {
                        f.write_char(',')?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_char(']')
            }
            Value::Map(map) => {
                f.write_char('{')?;
                for (i, field) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_char(';')?;
                    }
                    write!(f, "{}={}", field.name, field.value)?;
                }
                f.write_char('}')
            }
            Value::Null => f.write_str("null"),
        }
    }
}

/// Plain decimal for everyday magnitudes, exponent form outside
/// `[1e-4, 1e21)` so that extreme values stay short.
fn write_float(f: &mut fmt::Formatter<'_>, x: f64) -> fmt::Result {
    let magnitude = x.abs();
    if x.is_finite() && x != 0.0 && !(1e-4..1e21).contains(&magnitude) {
        write!(f, "{x:e}")
    } else {
        write!(f, "{x}")
    }
}

/// Render a slot that may hold no value. An empty slot renders as `null`.
pub fn render_slot(slot: Option<&Value>) -> String {
    match slot {
        Some(value) => value.to_string(),
        None => "null".to_string(),
    }
}
