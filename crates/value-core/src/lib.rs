//! # value-core
//!
//! A canonical, heterogeneous **value model** for structured data: scalars,
//! ordered lists and key-indexed maps under one sum type, with a **total
//! order** across every shape so that mixed collections can be sorted,
//! deduplicated or canonically hashed regardless of the format they came from.
//!
//! ## Quick start
//!
//! ```rust
//! use value_core::{List, Map, Value};
//!
//! // Numbers sort before strings, which sort before booleans, lists, maps and null.
//! assert!(Value::int(3).less(&Value::float(3.5)));
//! assert!(Value::float(1e9).less(&Value::string("a")));
//!
//! // Map ordering ignores insertion order.
//! let mut a = Map::new();
//! a.set("b", Value::int(2));
//! a.set("a", Value::int(1));
//! let b: Map = [("a", Value::int(1)), ("b", Value::int(2))].into_iter().collect();
//! assert!(!a.less(&b) && !b.less(&a));
//!
//! // The debug rendering keeps insertion order.
//! let list: List = [Value::int(1), Value::string("x")].into_iter().collect();
//! assert_eq!(Value::from(list).to_string(), r#"[1,"x"]"#);
//! assert_eq!(Value::from(a).to_string(), "{b=2;a=1}");
//! ```
//!
//! ## Modules
//!
//! - [`value`] — the `Value` sum type and scalar constructors
//! - [`list`] — `List`, an ordered sequence with lexicographic ordering
//! - [`map`] — `Map` and `Field`, with lazy key index and key-sorted order caches
//! - [`compare`] — the cross-type total comparator
//! - [`display`] — debug rendering
//! - [`json`] — conversion to and from `serde_json::Value`
//! - [`error`] — error types for the JSON adapter

pub mod compare;
pub mod display;
pub mod error;
pub mod json;
pub mod list;
pub mod map;
pub mod value;

pub use compare::{slot_less, sort_values};
pub use display::render_slot;
pub use error::ValueError;
pub use json::{from_json, from_json_str, to_json, to_json_string};
pub use list::List;
pub use map::{Field, Map};
pub use value::{Kind, Value};
