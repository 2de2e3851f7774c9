//! String to typed-value conversion.
//!
//! Pure functions with no knowledge of schemas or required-ness, usable on
//! any string outside the schema pipeline.

use std::fmt;

use serde::Serialize;
use strum::{Display, EnumString};
use thiserror::Error;

/// Strings that cast to `true`, compared case-insensitively.
const TRUTHY: [&str; 4] = ["true", "1", "yes", "on"];

/// The closed set of kinds a value can be cast to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum ValueKind {
    #[default]
    #[strum(to_string = "string", serialize = "str")]
    String,
    #[strum(to_string = "integer", serialize = "int")]
    Integer,
    #[strum(to_string = "float")]
    Float,
    #[strum(to_string = "boolean", serialize = "bool")]
    Boolean,
}

/// A typed value produced by [`cast`] or declared as a schema default.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
}

impl Value {
    /// The kind this value belongs to.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::String(_) => ValueKind::String,
            Value::Integer(_) => ValueKind::Integer,
            Value::Float(_) => ValueKind::Float,
            Value::Boolean(_) => ValueKind::Boolean,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => write!(f, "{s}"),
            Value::Integer(i) => write!(f, "{i}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::Boolean(b) => write!(f, "{b}"),
        }
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
        Value::Integer(i)
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

/// Errors from casting a string value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CastError {
    #[error("cannot cast '{value}' to {kind}")]
    Invalid { value: String, kind: ValueKind },

    #[error("unsupported type '{kind}' for value '{value}'")]
    UnsupportedType { value: String, kind: String },
}

/// Cast `value` to `kind`.
///
/// Booleans never fail: anything outside `true|1|yes|on` is `false`.
/// Strings are returned trimmed.
pub fn cast(value: &str, kind: ValueKind) -> Result<Value, CastError> {
    let trimmed = value.trim();
    let invalid = || CastError::Invalid {
        value: value.to_string(),
        kind,
    };

    match kind {
        ValueKind::Boolean => Ok(Value::Boolean(
            TRUTHY.iter().any(|t| trimmed.eq_ignore_ascii_case(t)),
        )),
        ValueKind::Integer => trimmed
            .parse::<i64>()
            .map(Value::Integer)
            .map_err(|_| invalid()),
        ValueKind::Float => trimmed
            .parse::<f64>()
            .map(Value::Float)
            .map_err(|_| invalid()),
        ValueKind::String => Ok(Value::String(trimmed.to_string())),
    }
}

/// Cast `value` to the kind named by `kind_name` (e.g. `"int"`, `"boolean"`).
pub fn cast_named(value: &str, kind_name: &str) -> Result<Value, CastError> {
    let kind = kind_name
        .parse::<ValueKind>()
        .map_err(|_| CastError::UnsupportedType {
            value: value.to_string(),
            kind: kind_name.to_string(),
        })?;
    cast(value, kind)
}
