//! The cross-type total comparator.
//!
//! Values are compared as a cascade of tiers. The first tier in which the two
//! operands differ decides:
//!
//! 1. numbers (`Float` and `Int`, compared numerically with each other)
//! 2. strings (byte-wise)
//! 3. booleans (`false < true`)
//! 4. lists (lexicographic, see [`compare_lists`])
//! 5. maps (lexicographic over name-sorted fields, see [`compare_maps`])
//! 6. null
//! 7. no value at all (only reachable through [`slot_less`])
//!
//! A value present in an earlier tier is always less than one that is not.
//! Float comparisons use IEEE `<`, so NaN compares equal to every number.
//! [`sort_values`] instead places NaN last among numbers.

use std::cmp::Ordering;

use crate::map::Map;
use crate::value::Value;

/// Position of a value's kind in the cross-type precedence.
fn tier(value: &Value) -> u8 {
    match value {
        Value::Float(_) | Value::Int(_) => 0,
        Value::String(_) => 1,
        Value::Boolean(_) => 2,
        Value::List(_) => 3,
        Value::Map(_) => 4,
        Value::Null => 5,
    }
}

/// How NaN is placed inside the numeric tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NanOrder {
    /// IEEE `<`: NaN is neither less nor greater than any number.
    Unordered,
    /// NaN after every other number and equal to itself. Keeps the order
    /// transitive, as sorting requires.
    Last,
}

/// Three-way total comparison of two values.
pub fn compare(lhs: &Value, rhs: &Value) -> Ordering {
    compare_with(lhs, rhs, NanOrder::Unordered)
}

/// `lhs < rhs` under the total order.
pub fn less(lhs: &Value, rhs: &Value) -> bool {
    compare(lhs, rhs) == Ordering::Less
}

/// Total order extended to slots that may hold no value.
///
/// An empty slot sorts after every value, null included, and two empty slots
/// are equal.
pub fn slot_less(lhs: Option<&Value>, rhs: Option<&Value>) -> bool {
    match (lhs, rhs) {
        (Some(a), Some(b)) => less(a, b),
        (Some(_), None) => true,
        (None, _) => false,
    }
}

/// Stable sort by the total order.
///
/// NaN is placed after every other number (still before strings) at any
/// depth, so inputs containing NaN sort deterministically. For NaN-free
/// values the result agrees with [`compare`].
pub fn sort_values(values: &mut [Value]) {
    values.sort_by(|a, b| compare_with(a, b, NanOrder::Last));
}

/// Lexicographic comparison of two value sequences.
pub fn compare_lists(lhs: &[Value], rhs: &[Value]) -> Ordering {
    compare_lists_with(lhs, rhs, NanOrder::Unordered)
}

/// Lexicographic comparison of two maps in field-name order.
///
/// At each position the names are compared first; the map carrying the
/// smaller name is less. Equal names fall through to the values.
pub fn compare_maps(lhs: &Map, rhs: &Map) -> Ordering {
    compare_maps_with(lhs, rhs, NanOrder::Unordered)
}

fn compare_with(lhs: &Value, rhs: &Value, nan: NanOrder) -> Ordering {
    match (lhs, rhs) {
        (Value::Float(a), Value::Float(b)) => compare_floats(*a, *b, nan),
        (Value::Float(a), Value::Int(b)) => compare_floats(*a, *b as f64, nan),
        (Value::Int(a), Value::Float(b)) => compare_floats(*a as f64, *b, nan),
        (Value::Int(a), Value::Int(b)) => a.cmp(b),
        (Value::String(a), Value::String(b)) => a.as_bytes().cmp(b.as_bytes()),
        (Value::Boolean(a), Value::Boolean(b)) => a.cmp(b),
        (Value::List(a), Value::List(b)) => compare_lists_with(a.items(), b.items(), nan),
        (Value::Map(a), Value::Map(b)) => compare_maps_with(a, b, nan),
        (Value::Null, Value::Null) => Ordering::Equal,
        _ => tier(lhs).cmp(&tier(rhs)),
    }
}

fn compare_floats(a: f64, b: f64, nan: NanOrder) -> Ordering {
    match (nan, a.is_nan(), b.is_nan()) {
        (NanOrder::Last, true, true) => Ordering::Equal,
        (NanOrder::Last, true, false) => Ordering::Greater,
        (NanOrder::Last, false, true) => Ordering::Less,
        _ => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}

fn compare_lists_with(lhs: &[Value], rhs: &[Value], nan: NanOrder) -> Ordering {
    for (a, b) in lhs.iter().zip(rhs) {
        let cmp = compare_with(a, b, nan);
        if cmp != Ordering::Equal {
            return cmp;
        }
    }

    // All shared positions are equal; the shorter one is less.
    lhs.len().cmp(&rhs.len())
}

fn compare_maps_with(lhs: &Map, rhs: &Map, nan: NanOrder) -> Ordering {
    for (a, b) in lhs.sorted_iter().zip(rhs.sorted_iter()) {
        let cmp = a.name.as_bytes().cmp(b.name.as_bytes());
        if cmp != Ordering::Equal {
            return cmp;
        }

        let cmp = compare_with(&a.value, &b.value, nan);
        if cmp != Ordering::Equal {
            return cmp;
        }
    }

    lhs.len().cmp(&rhs.len())
}
