//! Output renderers for `check` results: terminal and JSON.

pub mod json;
pub mod terminal;

use std::path::{Path, PathBuf};

use indexmap::IndexMap;

use crate::dotenv::RawMapping;
use crate::schema::{Schema, ValidatedMapping, Value, ValueKind};

/// Trait for rendering a check report to an output format.
pub trait OutputRenderer {
    /// Render the report to a string.
    fn render(&self, report: &CheckReport) -> String;
}

/// One variable in a report.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportEntry {
    pub value: Option<Value>,
    /// Declared kind, when a schema was applied.
    pub kind: Option<ValueKind>,
}

/// Result of loading (and optionally validating) one env file.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckReport {
    pub env_file: PathBuf,
    pub entries: IndexMap<String, ReportEntry>,
    /// Raw keys dropped because the schema does not declare them.
    pub dropped: Vec<String>,
    pub schema_applied: bool,
}

impl CheckReport {
    /// Report for a raw mapping with no schema applied.
    pub fn raw(env_file: &Path, raw: &RawMapping) -> Self {
        let entries = raw
            .iter()
            .map(|(key, value)| {
                (
                    key.clone(),
                    ReportEntry {
                        value: Some(Value::String(value.clone())),
                        kind: None,
                    },
                )
            })
            .collect();

        Self {
            env_file: env_file.to_path_buf(),
            entries,
            dropped: Vec::new(),
            schema_applied: false,
        }
    }

    /// Report for a validated mapping.
    pub fn validated(
        env_file: &Path,
        raw: &RawMapping,
        schema: &Schema,
        validated: ValidatedMapping,
    ) -> Self {
        let entries = validated
            .into_iter()
            .map(|(key, value)| {
                let kind = schema.get(&key).map(|rule| rule.kind);
                (key, ReportEntry { value, kind })
            })
            .collect();

        Self {
            env_file: env_file.to_path_buf(),
            entries,
            dropped: schema.undeclared(raw).into_iter().map(String::from).collect(),
            schema_applied: true,
        }
    }
}
