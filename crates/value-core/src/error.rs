//! Error types for converting between `Value` and JSON.
//!
//! The value model itself has no failure modes; only the JSON adapter in
//! [`crate::json`] returns these.

use thiserror::Error;

/// Errors that can occur while converting to or from JSON.
#[derive(Error, Debug)]
pub enum ValueError {
    /// The input string was not valid JSON.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// A JSON integer is above `i64::MAX` and has no `Int` representation.
    #[error("integer {0} does not fit in a signed 64-bit integer")]
    IntegerOverflow(u64),

    /// NaN and the infinities have no JSON representation.
    #[error("non-finite float {0} cannot be represented in JSON")]
    NonFiniteFloat(f64),
}

/// Convenience alias used throughout value-core.
pub type Result<T> = std::result::Result<T, ValueError>;
