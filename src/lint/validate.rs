//! Entry point for validating a workflow source.

use super::diagnostic::DiagnosticSink;
use super::document::WorkflowDocument;
use super::registry::RuleRegistry;
use super::rule::{LintContext, RuleId};
use crate::config::Policy;

/// Rule ID for failures that stop the run before any rule.
pub const SYNTAX_RULE: &str = "workflow-syntax";

/// Rule ID for a workflow file that could not be read.
pub const FILE_RULE: &str = "workflow-file";

/// Validate workflow source with the built-in rules.
pub fn validate_source(source: &str, policy: &Policy) -> DiagnosticSink {
    validate_with(&RuleRegistry::with_builtins(), source, policy)
}

/// Validate workflow source with the given rules.
///
/// A source that does not parse into a top-level mapping yields exactly one
/// error and no rule runs.
pub fn validate_with(registry: &RuleRegistry, source: &str, policy: &Policy) -> DiagnosticSink {
    let document = match WorkflowDocument::parse(source) {
        Ok(document) => document,
        Err(e) => {
            tracing::debug!("workflow rejected before rules: {}", e);
            return DiagnosticSink::from_failure(RuleId::new(SYNTAX_RULE), e.to_string());
        }
    };

    registry.run(&LintContext::new(&document, policy))
}
