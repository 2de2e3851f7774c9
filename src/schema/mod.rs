//! Schema application: required checks, casting, and defaults.
//!
//! [`apply`] turns a [`RawMapping`] into a [`ValidatedMapping`] keyed by
//! exactly the schema's keys. For each key the order is: required check,
//! then cast of the present value, then default fallback.

pub mod cast;
pub mod file;
pub mod rule;

use indexmap::IndexMap;
use thiserror::Error;

use crate::dotenv::RawMapping;

pub use cast::{CastError, Value, ValueKind, cast, cast_named};
pub use file::{RuleDecl, SchemaFileError};
pub use rule::{Schema, SchemaRule};

/// Schema-conformant output. `None` marks an optional key that was unset
/// and has no default.
pub type ValidatedMapping = IndexMap<String, Option<Value>>;

/// Errors while applying a schema. The first failing key aborts the run.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SchemaError {
    #[error("missing required env var: {key}")]
    MissingRequired { key: String },

    #[error("invalid value for {key}: cannot cast '{value}' to {kind}")]
    Cast {
        key: String,
        value: String,
        kind: ValueKind,
    },
}

/// Validate and cast `raw` against `schema`.
///
/// Raw keys not declared in the schema are dropped. A default is used as
/// declared, without casting, and never satisfies `required`.
pub fn apply(raw: &RawMapping, schema: &Schema) -> Result<ValidatedMapping, SchemaError> {
    let mut validated = ValidatedMapping::with_capacity(schema.len());

    for (key, rule) in schema.iter() {
        let raw_value = raw.get(key);

        if rule.required && raw_value.is_none() {
            return Err(SchemaError::MissingRequired {
                key: key.to_string(),
            });
        }

        let value = match raw_value {
            Some(value) => Some(cast(value, rule.kind).map_err(|_| SchemaError::Cast {
                key: key.to_string(),
                value: value.clone(),
                kind: rule.kind,
            })?),
            None => rule.default.clone(),
        };

        validated.insert(key.to_string(), value);
    }

    Ok(validated)
}
