//! JSON output renderer.
//!
//! Outputs `{"env_file": "...", "values": {...}, "dropped": [...]}`.

use crate::output::{CheckReport, OutputRenderer};

/// JSON output renderer.
pub struct JsonRenderer;

impl OutputRenderer for JsonRenderer {
    fn render(&self, report: &CheckReport) -> String {
        let values: serde_json::Map<String, serde_json::Value> = report
            .entries
            .iter()
            .map(|(key, entry)| {
                let value = serde_json::to_value(&entry.value).unwrap_or(serde_json::Value::Null);
                (key.clone(), value)
            })
            .collect();

        let output = serde_json::json!({
            "env_file": report.env_file.display().to_string(),
            "schema_applied": report.schema_applied,
            "values": values,
            "dropped": report.dropped,
        });

        serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string())
    }
}
