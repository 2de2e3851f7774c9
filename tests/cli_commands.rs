//! Integration tests for the check and bump CLI commands.
//!
//! These tests exercise the library functions that back each command,
//! using the public API from the envschema crate.

use std::path::Path;

use envschema::bump::{self, BumpError, BumpLevel};
use envschema::output::json::JsonRenderer;
use envschema::output::{CheckReport, OutputRenderer};
use envschema::schema::{self, Schema, SchemaError};
use pretty_assertions::assert_eq;
use semver::Version;

// ---------------------------------------------------------------------------
// check
// ---------------------------------------------------------------------------

fn check_json(env_content: &str, schema_toml: &str) -> Result<serde_json::Value, SchemaError> {
    let raw = envschema::dotenv::parse_str(env_content).unwrap();
    let schema = Schema::from_toml_str(schema_toml).unwrap();
    let validated = schema::apply(&raw, &schema)?;
    let report = CheckReport::validated(Path::new(".env"), &raw, &schema, validated);
    Ok(serde_json::from_str(&JsonRenderer.render(&report)).unwrap())
}

#[test]
fn check_renders_typed_json() {
    let parsed = check_json(
        "PORT=8080\nDEBUG=on\nRATIO=0.25\nNAME='svc'\nUNUSED=1\n",
        r#"
[PORT]
type = "integer"
required = true

[DEBUG]
type = "boolean"

[RATIO]
type = "float"

[NAME]

[REGION]
default = "eu-west-1"

[TIMEOUT]
type = "integer"
"#,
    )
    .unwrap();

    assert_eq!(parsed["values"]["PORT"], 8080);
    assert_eq!(parsed["values"]["DEBUG"], true);
    assert_eq!(parsed["values"]["RATIO"], 0.25);
    assert_eq!(parsed["values"]["NAME"], "svc");
    assert_eq!(parsed["values"]["REGION"], "eu-west-1");
    assert!(parsed["values"]["TIMEOUT"].is_null());
    assert_eq!(parsed["dropped"], serde_json::json!(["UNUSED"]));
}

#[test]
fn check_reports_missing_required() {
    let err = check_json("OTHER=1\n", "[API_KEY]\nrequired = true\n").unwrap_err();
    assert_eq!(err.to_string(), "missing required env var: API_KEY");
}

#[test]
fn check_reports_cast_failure() {
    let err = check_json("PORT=http\n", "[PORT]\ntype = \"int\"\n").unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("PORT"), "got: {msg}");
    assert!(msg.contains("'http'"), "got: {msg}");
    assert!(msg.contains("integer"), "got: {msg}");
}

// ---------------------------------------------------------------------------
// bump
// ---------------------------------------------------------------------------

#[test]
fn bump_pyproject_manifest() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pyproject.toml");
    std::fs::write(
        &path,
        "[project]\nname = \"dotenv-schema\"\nversion = \"0.3.9\"\n",
    )
    .unwrap();

    let bumped = bump::bump_file(&path, BumpLevel::Patch).unwrap();
    assert_eq!(bumped.old, Version::new(0, 3, 9));
    assert_eq!(bumped.new, Version::new(0, 3, 10));
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "[project]\nname = \"dotenv-schema\"\nversion = \"0.3.10\"\n"
    );
}

#[test]
fn bump_sequence_of_levels() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Cargo.toml");
    std::fs::write(&path, "[package]\nname = \"x\"\nversion = \"1.2.3\"\n").unwrap();

    assert_eq!(bump::bump_file(&path, BumpLevel::Patch).unwrap().new, Version::new(1, 2, 4));
    assert_eq!(bump::bump_file(&path, BumpLevel::Minor).unwrap().new, Version::new(1, 3, 0));
    assert_eq!(bump::bump_file(&path, BumpLevel::Major).unwrap().new, Version::new(2, 0, 0));
}

#[test]
fn bump_without_version_string_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Cargo.toml");
    std::fs::write(&path, "[package]\nname = \"x\"\n").unwrap();

    let err = bump::bump_file(&path, BumpLevel::Major).unwrap_err();
    assert!(matches!(err, BumpError::VersionNotFound { .. }));
    assert!(err.to_string().contains("could not find version"));
}
