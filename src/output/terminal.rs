//! Terminal renderer: one aligned line per variable.

use colored::Colorize;

use crate::output::{CheckReport, OutputRenderer};

/// Terminal output renderer with colored text.
pub struct TerminalRenderer;

impl OutputRenderer for TerminalRenderer {
    fn render(&self, report: &CheckReport) -> String {
        let mut output = String::new();

        if report.entries.is_empty() {
            output.push_str(&format!(
                "  {} No variables loaded from {}.\n",
                "ℹ".blue().bold(),
                report.env_file.display()
            ));
            return output;
        }

        let width = report
            .entries
            .keys()
            .map(|k| k.chars().count())
            .max()
            .unwrap_or(0);

        for (key, entry) in &report.entries {
            let value = match &entry.value {
                Some(v) => v.to_string(),
                None => "(unset)".dimmed().to_string(),
            };
            let kind = entry
                .kind
                .map(|k| format!("  {}", k.to_string().cyan()))
                .unwrap_or_default();
            // Pad before styling so ANSI codes don't skew the alignment.
            let padded = format!("{key:<width$}");
            output.push_str(&format!("  {}  {}{}\n", padded.bold(), value, kind));
        }

        if !report.dropped.is_empty() {
            output.push_str(&format!(
                "\n  {} not in schema: {}\n",
                "⚠".yellow().bold(),
                report.dropped.join(", ").dimmed()
            ));
        }

        let verb = if report.schema_applied { "validated" } else { "loaded" };
        let summary = format!(
            "  ✔ {} variable(s) {verb} from {}.\n",
            report.entries.len(),
            report.env_file.display()
        );
        output.push('\n');
        output.push_str(&summary.green().to_string());

        output
    }
}
