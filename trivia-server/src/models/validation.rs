//! Validation error types and lenient integer parsing for request bodies

use std::fmt;

use serde_json::Value;

/// Validation error for client input and configuration values
#[derive(Debug, Clone)]
pub enum ValidationError {
    /// Value is present but cannot be read as the expected type
    InvalidFormat { field: &'static str, reason: &'static str },

    /// Invalid enum variant
    InvalidVariant { field: &'static str, value: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat { field, reason } => {
                write!(f, "{}: {}", field, reason)
            }
            Self::InvalidVariant { field, value } => {
                write!(f, "invalid {} value: '{}'", field, value)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Read an optional integer field that clients may send as a number or a
/// numeric string. `null` reads as `None`.
pub fn int_from_json(field: &'static str, value: &Value) -> Result<Option<i32>, ValidationError> {
    match value {
        Value::Null => Ok(None),
        Value::Number(n) => n
            .as_i64()
            .and_then(|n| i32::try_from(n).ok())
            .map(Some)
            .ok_or(ValidationError::InvalidFormat {
                field,
                reason: "must be a 32-bit integer",
            }),
        Value::String(s) => s.trim().parse::<i32>().map(Some).map_err(|_| {
            ValidationError::InvalidFormat {
                field,
                reason: "must be a 32-bit integer",
            }
        }),
        _ => Err(ValidationError::InvalidFormat {
            field,
            reason: "must be a number or numeric string",
        }),
    }
}
