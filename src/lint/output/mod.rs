//! Lint output formatters.
//!
//! This module provides formatters for reporting a validation run
//! in different formats (human-readable report, JSON).

pub mod human;
pub mod json;

use std::io::Write;
use std::path::Path;

use crate::lint::DiagnosticSink;

/// Output format for lint results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
}

/// Trait for formatting lint output.
pub trait LintFormatter {
    /// Format the outcome of validating `path` to the given writer.
    fn format<W: Write + ?Sized>(
        &self,
        path: &Path,
        sink: &DiagnosticSink,
        writer: &mut W,
    ) -> std::io::Result<()>;
}

pub use human::HumanFormatter;
pub use json::JsonFormatter;
