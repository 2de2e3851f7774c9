//! TOML schema declarations.
//!
//! A standalone schema file has one table per variable:
//!
//! ```toml
//! [DATABASE_URL]
//! required = true
//!
//! [PORT]
//! type = "integer"
//! default = 8080
//! ```
//!
//! The same tables appear under `[schema.*]` in `.envschema.toml`.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::cast::{Value, ValueKind};
use super::rule::{Schema, SchemaRule};

/// Errors while loading schema declarations.
#[derive(Error, Debug)]
pub enum SchemaFileError {
    #[error("failed to read schema file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse schema: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("unsupported type '{kind}' for {key}. Supported: string, integer, float, boolean")]
    UnsupportedType { key: String, kind: String },

    #[error("invalid default for {key}: {found} values are not supported")]
    InvalidDefault { key: String, found: String },
}

/// One rule as written in TOML, before the type name is resolved.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleDecl {
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub required: bool,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<toml::Value>,
}

impl RuleDecl {
    /// Resolve the type name and default into a [`SchemaRule`].
    pub fn compile(&self, key: &str) -> Result<SchemaRule, SchemaFileError> {
        let kind = match &self.kind {
            Some(name) => name
                .parse::<ValueKind>()
                .map_err(|_| SchemaFileError::UnsupportedType {
                    key: key.to_string(),
                    kind: name.clone(),
                })?,
            None => ValueKind::default(),
        };

        let default = self
            .default
            .as_ref()
            .map(|value| default_value(key, value))
            .transpose()?;

        Ok(SchemaRule {
            required: self.required,
            kind,
            default,
        })
    }
}

/// Convert a TOML default into a [`Value`] without checking it against the
/// declared kind.
fn default_value(key: &str, value: &toml::Value) -> Result<Value, SchemaFileError> {
    match value {
        toml::Value::String(s) => Ok(Value::String(s.clone())),
        toml::Value::Integer(i) => Ok(Value::Integer(*i)),
        toml::Value::Float(f) => Ok(Value::Float(*f)),
        toml::Value::Boolean(b) => Ok(Value::Boolean(*b)),
        other => Err(SchemaFileError::InvalidDefault {
            key: key.to_string(),
            found: other.type_str().to_string(),
        }),
    }
}

impl Schema {
    /// Compile a set of declarations, logging a warning for every rule that
    /// is required and also declares a default.
    pub fn from_decls(decls: &IndexMap<String, RuleDecl>) -> Result<Self, SchemaFileError> {
        let schema = decls
            .iter()
            .map(|(key, decl)| Ok::<_, SchemaFileError>((key.clone(), decl.compile(key)?)))
            .collect::<Result<Schema, SchemaFileError>>()?;

        for key in schema.contradictions() {
            tracing::warn!(
                key,
                "rule is required and declares a default; the default is never used"
            );
        }

        Ok(schema)
    }

    /// Parse a standalone schema document.
    pub fn from_toml_str(content: &str) -> Result<Self, SchemaFileError> {
        let decls: IndexMap<String, RuleDecl> = toml::from_str(content)?;
        Self::from_decls(&decls)
    }

    /// Read and parse a standalone schema file.
    pub fn load(path: &Path) -> Result<Self, SchemaFileError> {
        let content = std::fs::read_to_string(path).map_err(|e| SchemaFileError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml_str(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_schema_document() {
        let schema = Schema::from_toml_str(
            r#"
[DATABASE_URL]
required = true

[PORT]
type = "int"
default = 8080

[RATIO]
type = "float"

[DEBUG]
type = "bool"
default = false

[NAME]
default = "fallback"
"#,
        )
        .unwrap();

        assert_eq!(schema.len(), 5);
        assert_eq!(
            schema.get("DATABASE_URL"),
            Some(&SchemaRule::new(ValueKind::String).required())
        );
        assert_eq!(
            schema.get("PORT"),
            Some(&SchemaRule::new(ValueKind::Integer).with_default(8080i64))
        );
        assert_eq!(schema.get("RATIO"), Some(&SchemaRule::new(ValueKind::Float)));
        assert_eq!(
            schema.get("DEBUG"),
            Some(&SchemaRule::new(ValueKind::Boolean).with_default(false))
        );
        assert_eq!(
            schema.get("NAME"),
            Some(&SchemaRule::default().with_default("fallback"))
        );
    }

    #[test]
    fn unsupported_type_is_rejected() {
        let err = Schema::from_toml_str("[LIST]\ntype = \"list\"\n").unwrap_err();
        match err {
            SchemaFileError::UnsupportedType { key, kind } => {
                assert_eq!(key, "LIST");
                assert_eq!(kind, "list");
            }
            other => panic!("expected UnsupportedType, got {other:?}"),
        }
    }

    #[test]
    fn array_default_is_rejected() {
        let err = Schema::from_toml_str("[HOSTS]\ndefault = [\"a\", \"b\"]\n").unwrap_err();
        assert!(
            matches!(err, SchemaFileError::InvalidDefault { ref found, .. } if found == "array"),
            "got: {err:?}"
        );
    }

    #[test]
    fn unknown_rule_field_is_rejected() {
        let err = Schema::from_toml_str("[PORT]\nrequird = true\n").unwrap_err();
        assert!(matches!(err, SchemaFileError::Parse(_)), "got: {err:?}");
    }

    #[test]
    fn mismatched_default_is_kept_verbatim() {
        let schema = Schema::from_toml_str("[PORT]\ntype = \"integer\"\ndefault = \"auto\"\n").unwrap();
        assert_eq!(
            schema.get("PORT").unwrap().default,
            Some(Value::from("auto"))
        );
    }

    #[test]
    fn contradictory_rule_is_loaded() {
        let schema =
            Schema::from_toml_str("[TOKEN]\nrequired = true\ndefault = \"dev\"\n").unwrap();
        assert_eq!(schema.contradictions(), vec!["TOKEN"]);
    }

    #[test]
    fn load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Schema::load(&dir.path().join("schema.toml")).unwrap_err();
        assert!(err.to_string().contains("read"), "got: {err}");
    }

    #[test]
    fn load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("schema.toml");
        std::fs::write(&path, "[A]\ntype = \"integer\"\n").unwrap();

        let schema = Schema::load(&path).unwrap();
        assert_eq!(schema.get("A"), Some(&SchemaRule::new(ValueKind::Integer)));
    }
}
