//! Aggregate JSON shape validation
//!
//! serde stops at the first bad field; API callers want every problem with a
//! response body reported at once. Types implement [`JsonShape`] to walk the
//! raw value and collect all missing or mistyped required fields before the
//! typed deserialization runs.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{FlatfileError, Result};

/// A type that can pre-validate its JSON shape, collecting every failure
pub trait JsonShape: DeserializeOwned {
    /// Return one entry per missing or mistyped field; empty means valid
    fn check(value: &Value) -> Vec<String>;
}

/// Decode a JSON value into `T`, aggregating all shape errors
pub fn decode<T: JsonShape>(value: &Value) -> Result<T> {
    let errors = T::check(value);
    if !errors.is_empty() {
        return Err(FlatfileError::Decode { errors });
    }
    serde_json::from_value(value.clone()).map_err(|e| FlatfileError::Decode {
        errors: vec![e.to_string()],
    })
}

/// Require a field to be present and non-null
///
/// Returns the field value when present so callers can nest further checks.
pub fn require<'a>(value: &'a Value, field: &str, errors: &mut Vec<String>) -> Option<&'a Value> {
    match value.get(field) {
        Some(v) if !v.is_null() => Some(v),
        _ => {
            errors.push(format!("{}: required", field));
            None
        }
    }
}

/// Require a field to be a string
pub fn require_str(value: &Value, field: &str, errors: &mut Vec<String>) {
    if let Some(v) = require(value, field, errors) {
        if !v.is_string() {
            errors.push(format!("{}: expected a string", field));
        }
    }
}

/// Require a field to be an array, returning its items for nested checks
pub fn require_array<'a>(
    value: &'a Value,
    field: &str,
    errors: &mut Vec<String>,
) -> Option<&'a Vec<Value>> {
    match require(value, field, errors) {
        Some(v) => match v.as_array() {
            Some(items) => Some(items),
            None => {
                errors.push(format!("{}: expected an array", field));
                None
            }
        },
        None => None,
    }
}
