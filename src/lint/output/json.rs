//! JSON output formatter.
//!
//! Formats a validation run as machine-readable JSON for tooling integration.

use std::io::Write;
use std::path::Path;

use serde::Serialize;

use super::LintFormatter;
use crate::lint::DiagnosticSink;

/// Formats lint output as JSON.
#[derive(Debug, Default)]
pub struct JsonFormatter {
    /// Whether warnings fail the run.
    pub strict: bool,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    path: String,
    diagnostics: Vec<JsonDiagnostic<'a>>,
    summary: JsonSummary,
}

#[derive(Serialize)]
struct JsonDiagnostic<'a> {
    rule_id: &'a str,
    severity: String,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    suggestion: Option<&'a str>,
}

#[derive(Serialize)]
struct JsonSummary {
    total: usize,
    errors: usize,
    warnings: usize,
    passed: bool,
}

impl JsonFormatter {
    /// Create a new JSON formatter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Treat warnings as failures in the summary.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

impl LintFormatter for JsonFormatter {
    fn format<W: Write + ?Sized>(
        &self,
        path: &Path,
        sink: &DiagnosticSink,
        writer: &mut W,
    ) -> std::io::Result<()> {
        let diagnostics = sink
            .diagnostics()
            .iter()
            .map(|d| JsonDiagnostic {
                rule_id: &d.rule_id.0,
                severity: d.severity.to_string(),
                message: &d.message,
                suggestion: d.suggestion.as_deref(),
            })
            .collect();

        let output = JsonOutput {
            path: path.display().to_string(),
            diagnostics,
            summary: JsonSummary {
                total: sink.len(),
                errors: sink.error_count(),
                warnings: sink.warning_count(),
                passed: sink.passed(self.strict),
            },
        };

        serde_json::to_writer_pretty(&mut *writer, &output).map_err(std::io::Error::other)?;
        writeln!(writer)?;

        Ok(())
    }
}
