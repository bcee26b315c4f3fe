//! Human-readable output formatter.
//!
//! Prints the validated path, warnings, errors, and a final
//! `RESULT: PASS|FAIL` line, with optional color support.

use std::io::Write;
use std::path::Path;

use console::Style;

use super::LintFormatter;
use crate::lint::{DiagnosticSink, LintDiagnostic};

const SEPARATOR_WIDTH: usize = 60;

/// Formats lint output for human consumption.
pub struct HumanFormatter {
    /// Whether warnings fail the run.
    pub strict: bool,
    warning: Style,
    error: Style,
    pass: Style,
    fail: Style,
}

impl HumanFormatter {
    /// Create a new human formatter; `use_color` picks styled or plain output.
    pub fn new(use_color: bool) -> Self {
        let (warning, error, pass, fail) = if use_color {
            (
                Style::new().yellow(),
                Style::new().red().bold(),
                Style::new().green().bold(),
                Style::new().red().bold(),
            )
        } else {
            (Style::new(), Style::new(), Style::new(), Style::new())
        };

        Self {
            strict: false,
            warning,
            error,
            pass,
            fail,
        }
    }

    /// Treat warnings as failures in the result line.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    fn section<'a, W: Write + ?Sized>(
        writer: &mut W,
        title: &str,
        glyph: impl std::fmt::Display,
        diagnostics: &[&'a LintDiagnostic],
    ) -> std::io::Result<()> {
        if diagnostics.is_empty() {
            return Ok(());
        }

        writeln!(writer)?;
        writeln!(writer, "{} ({}):", title, diagnostics.len())?;
        for diag in diagnostics {
            writeln!(writer, "  {}  {}", glyph, diag.message)?;
        }
        Ok(())
    }
}

impl LintFormatter for HumanFormatter {
    fn format<W: Write + ?Sized>(
        &self,
        path: &Path,
        sink: &DiagnosticSink,
        writer: &mut W,
    ) -> std::io::Result<()> {
        writeln!(writer, "Validating: {}", path.display())?;
        writeln!(writer, "{}", "=".repeat(SEPARATOR_WIDTH))?;

        let warnings: Vec<_> = sink.warnings().collect();
        let errors: Vec<_> = sink.errors().collect();

        Self::section(writer, "Warnings", self.warning.apply_to("⚠"), &warnings)?;
        Self::section(writer, "Errors", self.error.apply_to("✗"), &errors)?;

        writeln!(writer)?;
        if sink.passed(self.strict) {
            writeln!(
                writer,
                "{} (0 errors, {} warning(s))",
                self.pass.apply_to("RESULT: PASS"),
                warnings.len()
            )?;
        } else {
            writeln!(
                writer,
                "{} ({} error(s), {} warning(s))",
                self.fail.apply_to("RESULT: FAIL"),
                errors.len(),
                warnings.len()
            )?;
        }

        Ok(())
    }
}
