//! Error handling for the activity-decoder library.
//!
//! Field-level decoding never fails: a missing or malformed field simply
//! resolves to `None`. The only failures surfaced here belong to the outer
//! envelope, when the bytes handed to the decoder are not a JSON document of
//! a usable shape.

use serde_json::Value;
use thiserror::Error;

/// Envelope-level decode failure.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Payload is not valid JSON
    #[error("Payload is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    /// Payload parsed, but its top level is a scalar
    #[error("Expected a JSON {expected} at the top level, found {found}")]
    UnexpectedShape {
        expected: &'static str,
        found: &'static str,
    },
}

/// Result type alias for activity-decoder operations.
pub type Result<T> = std::result::Result<T, DecodeError>;

/// Name of a JSON value's kind, for error messages and logs.
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Extension trait for turning a failed shape check into a [`DecodeError`].
pub trait OptionExt<T> {
    /// Convert `None` into [`DecodeError::UnexpectedShape`] describing `found`.
    fn ok_or_shape(self, expected: &'static str, found: &Value) -> Result<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_shape(self, expected: &'static str, found: &Value) -> Result<T> {
        self.ok_or_else(|| DecodeError::UnexpectedShape {
            expected,
            found: json_kind(found),
        })
    }
}
