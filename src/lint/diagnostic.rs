//! Lint diagnostic messages and their accumulator.
//!
//! This module provides the [`LintDiagnostic`] type for representing
//! issues found during workflow validation, and the [`DiagnosticSink`]
//! that collects them for a single run.

use super::rule::{RuleId, Severity};

/// A diagnostic message produced by a lint rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintDiagnostic {
    /// The rule that produced this diagnostic.
    pub rule_id: RuleId,
    /// Severity of this diagnostic.
    pub severity: Severity,
    /// Human-readable message.
    pub message: String,
    /// Optional suggestion for fixing the issue.
    pub suggestion: Option<String>,
}

impl LintDiagnostic {
    /// Create a new diagnostic.
    pub fn new(rule_id: RuleId, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            rule_id,
            severity,
            message: message.into(),
            suggestion: None,
        }
    }

    /// Add a fix suggestion.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

/// Ordered, append-only collection of diagnostics for one validation run.
///
/// Diagnostics keep the order they were pushed in, which is the fixed rule
/// order. Nothing is deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiagnosticSink {
    diagnostics: Vec<LintDiagnostic>,
}

impl DiagnosticSink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// A sink holding a single error that ended the run before any rule.
    pub fn from_failure(rule_id: RuleId, message: impl Into<String>) -> Self {
        let mut sink = Self::new();
        sink.error(rule_id, message);
        sink
    }

    /// Append a diagnostic.
    pub fn push(&mut self, diagnostic: LintDiagnostic) {
        tracing::debug!(
            rule = %diagnostic.rule_id,
            severity = %diagnostic.severity,
            "{}",
            diagnostic.message
        );
        self.diagnostics.push(diagnostic);
    }

    /// Append an error.
    pub fn error(&mut self, rule_id: RuleId, message: impl Into<String>) {
        self.push(LintDiagnostic::new(rule_id, Severity::Error, message));
    }

    /// Append a warning.
    pub fn warning(&mut self, rule_id: RuleId, message: impl Into<String>) {
        self.push(LintDiagnostic::new(rule_id, Severity::Warning, message));
    }

    /// All diagnostics in emission order.
    pub fn diagnostics(&self) -> &[LintDiagnostic] {
        &self.diagnostics
    }

    /// Errors in emission order.
    pub fn errors(&self) -> impl Iterator<Item = &LintDiagnostic> {
        self.with_severity(Severity::Error)
    }

    /// Warnings in emission order.
    pub fn warnings(&self) -> impl Iterator<Item = &LintDiagnostic> {
        self.with_severity(Severity::Warning)
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    /// Whether the run passes. In strict mode warnings fail it too.
    pub fn passed(&self, strict: bool) -> bool {
        if strict {
            self.diagnostics.is_empty()
        } else {
            !self.has_errors()
        }
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    fn with_severity(&self, severity: Severity) -> impl Iterator<Item = &LintDiagnostic> {
        self.diagnostics
            .iter()
            .filter(move |d| d.severity == severity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagnostic_creation() {
        let diag = LintDiagnostic::new(RuleId::new("test-rule"), Severity::Error, "Test message");

        assert_eq!(diag.rule_id, RuleId::new("test-rule"));
        assert_eq!(diag.severity, Severity::Error);
        assert_eq!(diag.message, "Test message");
        assert!(diag.suggestion.is_none());
    }

    #[test]
    fn diagnostic_with_suggestion() {
        let diag = LintDiagnostic::new(RuleId::new("test-rule"), Severity::Warning, "Test warning")
            .with_suggestion("Fix it like this");

        assert_eq!(diag.suggestion.as_deref(), Some("Fix it like this"));
    }

    #[test]
    fn sink_keeps_emission_order_per_tier() {
        let mut sink = DiagnosticSink::new();
        sink.error(RuleId::new("a"), "first error");
        sink.warning(RuleId::new("b"), "first warning");
        sink.error(RuleId::new("c"), "second error");
        sink.warning(RuleId::new("d"), "second warning");

        let errors: Vec<_> = sink.errors().map(|d| d.message.as_str()).collect();
        let warnings: Vec<_> = sink.warnings().map(|d| d.message.as_str()).collect();

        assert_eq!(errors, vec!["first error", "second error"]);
        assert_eq!(warnings, vec!["first warning", "second warning"]);
        assert_eq!(sink.len(), 4);
    }

    #[test]
    fn sink_does_not_deduplicate() {
        let mut sink = DiagnosticSink::new();
        sink.error(RuleId::new("r"), "same");
        sink.error(RuleId::new("r"), "same");

        assert_eq!(sink.error_count(), 2);
    }

    #[test]
    fn warnings_alone_pass() {
        let mut sink = DiagnosticSink::new();
        sink.warning(RuleId::new("r"), "advisory");

        assert!(sink.passed(false));
        assert!(!sink.passed(true));
        assert_eq!(sink.warning_count(), 1);
        assert_eq!(sink.error_count(), 0);
    }

    #[test]
    fn any_error_fails() {
        let mut sink = DiagnosticSink::new();
        sink.warning(RuleId::new("r"), "advisory");
        sink.error(RuleId::new("r"), "blocking");

        assert!(sink.has_errors());
        assert!(!sink.passed(false));
    }

    #[test]
    fn empty_sink_passes_strict() {
        let sink = DiagnosticSink::new();
        assert!(sink.is_empty());
        assert!(sink.passed(true));
    }

    #[test]
    fn from_failure_holds_single_error() {
        let sink = DiagnosticSink::from_failure(RuleId::new("workflow-file"), "File not found: x");

        assert_eq!(sink.len(), 1);
        assert_eq!(sink.diagnostics()[0].severity, Severity::Error);
        assert_eq!(sink.diagnostics()[0].message, "File not found: x");
    }
}
