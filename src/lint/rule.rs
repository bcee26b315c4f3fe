//! Lint rule definitions.
//!
//! This module provides the core traits and types for defining lint rules:
//!
//! - [`LintRule`] - The trait that all lint rules must implement
//! - [`LintContext`] - What a rule gets to look at
//! - [`RuleId`] - Unique identifier for a lint rule
//! - [`Severity`] - Severity level for diagnostics (Warning, Error)

use super::diagnostic::DiagnosticSink;
use super::document::WorkflowDocument;
use crate::config::Policy;

/// Unique identifier for a lint rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RuleId(pub String);

impl RuleId {
    /// Create a new rule ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for RuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Severity level for lint diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Advisory, does not fail the run.
    Warning,
    /// Violates a mandatory contract and fails the run.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// Inputs shared by every rule in a run.
#[derive(Debug, Clone, Copy)]
pub struct LintContext<'a> {
    /// The normalized workflow.
    pub document: &'a WorkflowDocument,
    /// Expected values to compare against.
    pub policy: &'a Policy,
}

impl<'a> LintContext<'a> {
    /// Create a context for one run.
    pub fn new(document: &'a WorkflowDocument, policy: &'a Policy) -> Self {
        Self { document, policy }
    }
}

/// A lint rule that validates the workflow.
///
/// Each rule checks one aspect of the workflow and appends diagnostics to
/// the sink. Rules never look at each other's output, so every rule runs
/// regardless of what the previous ones found.
pub trait LintRule: Send + Sync {
    /// Unique identifier for this rule.
    fn id(&self) -> RuleId;

    /// Human-readable name of the rule.
    fn name(&self) -> &str;

    /// Description of what this rule checks.
    fn description(&self) -> &str;

    /// Severity of the rule's primary diagnostic.
    ///
    /// Individual checks inside a rule may still emit the other tier.
    fn default_severity(&self) -> Severity;

    /// Check the workflow and append any diagnostics.
    fn check(&self, ctx: &LintContext<'_>, sink: &mut DiagnosticSink);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_id_equality() {
        let id1 = RuleId::new("test-rule");
        let id2 = RuleId::new("test-rule");
        let id3 = RuleId::new("other-rule");

        assert_eq!(id1, id2);
        assert_ne!(id1, id3);
    }

    #[test]
    fn rule_id_display() {
        let id = RuleId::new("my-rule");
        assert_eq!(format!("{}", id), "my-rule");
    }

    #[test]
    fn severity_ordering() {
        assert!(Severity::Warning < Severity::Error);
    }

    #[test]
    fn severity_display() {
        assert_eq!(format!("{}", Severity::Warning), "warning");
        assert_eq!(format!("{}", Severity::Error), "error");
    }
}
