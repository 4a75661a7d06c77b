//! The `Value` sum type: one node of a structured data tree.
//!
//! Exactly one variant is active at a time; the "several optional payloads,
//! at most one set" shape that formats like JSON/YAML decoders often produce
//! cannot be expressed here. A slot that holds no value at all is modelled by
//! the caller as `Option<Value>` (see [`crate::compare::slot_less`]).

use std::cmp::Ordering;
use std::fmt;

use crate::compare;
use crate::list::List;
use crate::map::Map;

/// A scalar, composite or explicit-null value.
///
/// Equality and ordering follow the total order in [`crate::compare`]:
/// `Int(3)` equals `Float(3.0)`, and two maps holding the same fields in a
/// different insertion order are equal.
#[derive(Debug, Clone)]
pub enum Value {
    /// IEEE-754 double.
    Float(f64),
    /// Signed 64-bit integer.
    Int(i64),
    /// UTF-8 text.
    String(String),
    Boolean(bool),
    List(List),
    Map(Map),
    /// An explicit `null`, distinct from an absent value.
    Null,
}

/// The kind of payload a [`Value`] carries, without the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Float,
    Int,
    String,
    Boolean,
    List,
    Map,
    Null,
}

impl Kind {
    /// Lower-case name, as used in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            Kind::Float => "float",
            Kind::Int => "int",
            Kind::String => "string",
            Kind::Boolean => "boolean",
            Kind::List => "list",
            Kind::Map => "map",
            Kind::Null => "null",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Value {
    /// A scalar string value.
    pub fn string(s: impl Into<String>) -> Self {
        Value::String(s.into())
    }

    /// A scalar integer value.
    pub fn int(i: i64) -> Self {
        Value::Int(i)
    }

    /// A scalar float value.
    pub fn float(f: f64) -> Self {
        Value::Float(f)
    }

    /// A scalar boolean value.
    pub fn boolean(b: bool) -> Self {
        Value::Boolean(b)
    }

    pub fn kind(&self) -> Kind {
        match self {
            Value::Float(_) => Kind::Float,
            Value::Int(_) => Kind::Int,
            Value::String(_) => Kind::String,
            Value::Boolean(_) => Kind::Boolean,
            Value::List(_) => Kind::List,
            Value::Map(_) => Kind::Map,
            Value::Null => Kind::Null,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// True for both `Int` and `Float`.
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Int(_) | Value::Float(_))
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&List> {
        match self {
            Value::List(l) => Some(l),
            _ => None,
        }
    }

    pub fn as_list_mut(&mut self) -> Option<&mut List> {
        match self {
            Value::List(l) => Some(l),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&Map> {
        match self {
            Value::Map(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_map_mut(&mut self) -> Option<&mut Map> {
        match self {
            Value::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Strict total order over values of any kind.
    ///
    /// Cross-kind precedence is numbers < strings < booleans < lists < maps <
    /// null. Ints and floats compare numerically with each other.
    pub fn less(&self, other: &Value) -> bool {
        compare::compare(self, other) == Ordering::Less
    }

    /// Three-way form of [`Value::less`].
    pub fn compare(&self, other: &Value) -> Ordering {
        compare::compare(self, other)
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        compare::compare(self, other) == Ordering::Equal
    }
}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(compare::compare(self, other))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<List> for Value {
    fn from(l: List) -> Self {
        Value::List(l)
    }
}

impl From<Map> for Value {
    fn from(m: Map) -> Self {
        Value::Map(m)
    }
}
