//! Field readers for validating JSON request bodies -- pure logic, no I/O.
//!
//! Each reader looks up one field in a JSON object and either returns the
//! typed value or a [`CoreError::Validation`] naming that field. Callers
//! read fields in declaration order and propagate with `?`, so the first
//! failing field is the one reported.
//!
//! Three presence modes are supported:
//!
//! - `required_*`: the field must be present and non-null.
//! - `optional_*`: the field may be absent; `null` is a type error.
//! - `nullable_*`: the field may be absent or `null`. Returns
//!   `Option<Option<T>>` so callers can tell "absent" from "explicit null".

use serde_json::{Map, Value};

use crate::error::CoreError;

/// Message used when a required field is missing or null.
pub const MSG_REQUIRED: &str = "Required";

/// A closed set of string values accepted for a field.
pub trait EnumValue: Sized + Copy + 'static {
    /// Every accepted value, in the order they are listed in error messages.
    const ALL: &'static [Self];

    /// The wire representation of this value.
    fn as_str(self) -> &'static str;

    /// Look up a value by its wire representation.
    fn parse(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.as_str() == s)
    }
}

/// The JSON type name used in "Expected X, received Y" messages.
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn type_mismatch(field: &str, expected: &str, value: &Value) -> CoreError {
    CoreError::invalid_field(
        field,
        format!("Expected {expected}, received {}", type_name(value)),
    )
}

fn missing(field: &str) -> CoreError {
    CoreError::invalid_field(field, MSG_REQUIRED)
}

/// Require the request body to be a JSON object.
pub fn as_object(input: &Value) -> Result<&Map<String, Value>, CoreError> {
    match input {
        Value::Object(map) => Ok(map),
        other => Err(CoreError::Validation {
            field: None,
            message: format!("Expected object, received {}", type_name(other)),
        }),
    }
}

// ---------------------------------------------------------------------------
// Strings
// ---------------------------------------------------------------------------

fn string_value(field: &str, value: &Value) -> Result<String, CoreError> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| type_mismatch(field, "string", value))
}

pub fn required_string(data: &Map<String, Value>, field: &str) -> Result<String, CoreError> {
    match data.get(field) {
        None | Some(Value::Null) => Err(missing(field)),
        Some(v) => string_value(field, v),
    }
}

pub fn optional_string(
    data: &Map<String, Value>,
    field: &str,
) -> Result<Option<String>, CoreError> {
    match data.get(field) {
        None => Ok(None),
        Some(v) => string_value(field, v).map(Some),
    }
}

pub fn nullable_string(
    data: &Map<String, Value>,
    field: &str,
) -> Result<Option<Option<String>>, CoreError> {
    match data.get(field) {
        None => Ok(None),
        Some(Value::Null) => Ok(Some(None)),
        Some(v) => string_value(field, v).map(|s| Some(Some(s))),
    }
}

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

fn enum_value<E: EnumValue>(field: &str, value: &Value) -> Result<E, CoreError> {
    let s = value
        .as_str()
        .ok_or_else(|| type_mismatch(field, "string", value))?;
    E::parse(s).ok_or_else(|| {
        let expected = E::ALL
            .iter()
            .map(|v| format!("'{}'", v.as_str()))
            .collect::<Vec<_>>()
            .join(" | ");
        CoreError::invalid_field(
            field,
            format!("Invalid enum value. Expected {expected}, received '{s}'"),
        )
    })
}

pub fn required_enum<E: EnumValue>(data: &Map<String, Value>, field: &str) -> Result<E, CoreError> {
    match data.get(field) {
        None | Some(Value::Null) => Err(missing(field)),
        Some(v) => enum_value(field, v),
    }
}

pub fn optional_enum<E: EnumValue>(
    data: &Map<String, Value>,
    field: &str,
) -> Result<Option<E>, CoreError> {
    match data.get(field) {
        None => Ok(None),
        Some(v) => enum_value(field, v).map(Some),
    }
}

// ---------------------------------------------------------------------------
// Numbers
// ---------------------------------------------------------------------------

fn integer_value(field: &str, value: &Value) -> Result<i32, CoreError> {
    if let Some(n) = value.as_i64() {
        return i32::try_from(n).map_err(|_| {
            CoreError::invalid_field(field, format!("Number must fit in 32 bits, received {n}"))
        });
    }
    match value.as_f64() {
        Some(f) if f.fract() == 0.0 && f >= f64::from(i32::MIN) && f <= f64::from(i32::MAX) => {
            Ok(f as i32)
        }
        Some(_) => Err(CoreError::invalid_field(
            field,
            "Expected integer, received float",
        )),
        None => Err(type_mismatch(field, "number", value)),
    }
}

pub fn nullable_integer(
    data: &Map<String, Value>,
    field: &str,
) -> Result<Option<Option<i32>>, CoreError> {
    match data.get(field) {
        None => Ok(None),
        Some(Value::Null) => Ok(Some(None)),
        Some(v) => integer_value(field, v).map(|n| Some(Some(n))),
    }
}

pub fn optional_number(data: &Map<String, Value>, field: &str) -> Result<Option<f64>, CoreError> {
    match data.get(field) {
        None => Ok(None),
        Some(v) => v
            .as_f64()
            .map(Some)
            .ok_or_else(|| type_mismatch(field, "number", v)),
    }
}

// ---------------------------------------------------------------------------
// Composite values
// ---------------------------------------------------------------------------

pub fn optional_string_array(
    data: &Map<String, Value>,
    field: &str,
) -> Result<Option<Vec<String>>, CoreError> {
    let items = match data.get(field) {
        None => return Ok(None),
        Some(Value::Array(items)) => items,
        Some(v) => return Err(type_mismatch(field, "array", v)),
    };
    items
        .iter()
        .enumerate()
        .map(|(i, item)| string_value(&format!("{field}.{i}"), item))
        .collect::<Result<Vec<_>, _>>()
        .map(Some)
}

pub fn nullable_object<'a>(
    data: &'a Map<String, Value>,
    field: &str,
) -> Result<Option<Option<&'a Map<String, Value>>>, CoreError> {
    match data.get(field) {
        None => Ok(None),
        Some(Value::Null) => Ok(Some(None)),
        Some(Value::Object(map)) => Ok(Some(Some(map))),
        Some(v) => Err(type_mismatch(field, "object", v)),
    }
}

/// Prefix the field of a nested validation error with its parent path,
/// e.g. `confidence` inside `metadata` becomes `metadata.confidence`.
pub fn nested(parent: &str, err: CoreError) -> CoreError {
    match err {
        CoreError::Validation {
            field: Some(field),
            message,
        } => CoreError::Validation {
            field: Some(format!("{parent}.{field}")),
            message,
        },
        CoreError::Validation {
            field: None,
            message,
        } => CoreError::Validation {
            field: Some(parent.to_string()),
            message,
        },
        other => other,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
