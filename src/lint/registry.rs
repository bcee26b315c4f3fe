//! Rule registry for managing lint rules.
//!
//! The [`RuleRegistry`] stores lint rules in registration order, which is
//! also the order they run in and the order their diagnostics are reported.

use super::diagnostic::DiagnosticSink;
use super::rule::{LintContext, LintRule, RuleId};
use super::rules::{
    BuildJobRule, DispatchTriggerRule, JobsDefinedRule, PermissionsRule, RepoReferencesRule,
    RequiredKeysRule, SmokeJobRule,
};

/// Ordered collection of lint rules.
pub struct RuleRegistry {
    rules: Vec<Box<dyn LintRule>>,
}

impl RuleRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Create a registry with all built-in rules in execution order.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(RequiredKeysRule));
        registry.register(Box::new(DispatchTriggerRule));
        registry.register(Box::new(PermissionsRule));
        registry.register(Box::new(JobsDefinedRule));
        registry.register(Box::new(BuildJobRule));
        registry.register(Box::new(SmokeJobRule));
        registry.register(Box::new(RepoReferencesRule));
        registry
    }

    /// Register a lint rule. A rule with the same ID is replaced in place.
    pub fn register(&mut self, rule: Box<dyn LintRule>) {
        let id = rule.id();
        match self.rules.iter().position(|r| r.id() == id) {
            Some(index) => self.rules[index] = rule,
            None => self.rules.push(rule),
        }
    }

    /// Get a rule by ID.
    pub fn get(&self, id: &RuleId) -> Option<&dyn LintRule> {
        self.rules.iter().find(|r| &r.id() == id).map(|r| r.as_ref())
    }

    /// Iterate over all rules in execution order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn LintRule> {
        self.rules.iter().map(|r| r.as_ref())
    }

    /// Run every rule and collect the diagnostics.
    pub fn run(&self, ctx: &LintContext<'_>) -> DiagnosticSink {
        let mut sink = DiagnosticSink::new();
        for rule in self.iter() {
            let before = sink.len();
            rule.check(ctx, &mut sink);
            tracing::debug!(
                rule = %rule.id(),
                diagnostics = sink.len() - before,
                "rule finished"
            );
        }
        sink
    }

    /// Get the number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Policy;
    use crate::lint::{Severity, WorkflowDocument};

    struct MockRule {
        id: RuleId,
        message: &'static str,
    }

    impl LintRule for MockRule {
        fn id(&self) -> RuleId {
            self.id.clone()
        }
        fn name(&self) -> &str {
            "Mock Rule"
        }
        fn description(&self) -> &str {
            "A mock rule for testing"
        }
        fn default_severity(&self) -> Severity {
            Severity::Warning
        }
        fn check(&self, _ctx: &LintContext<'_>, sink: &mut DiagnosticSink) {
            sink.warning(self.id(), self.message);
        }
    }

    fn mock(id: &str, message: &'static str) -> Box<dyn LintRule> {
        Box::new(MockRule {
            id: RuleId::new(id),
            message,
        })
    }

    #[test]
    fn registry_new_is_empty() {
        let registry = RuleRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn registry_register_and_get() {
        let mut registry = RuleRegistry::new();
        registry.register(mock("mock", "m"));

        assert!(!registry.is_empty());
        assert!(registry.get(&RuleId::new("mock")).is_some());
        assert!(registry.get(&RuleId::new("unknown")).is_none());
    }

    #[test]
    fn registering_same_id_replaces() {
        let mut registry = RuleRegistry::new();
        registry.register(mock("a", "first"));
        registry.register(mock("b", "b"));
        registry.register(mock("a", "second"));

        assert_eq!(registry.len(), 2);
        let ids: Vec<String> = registry.iter().map(|r| r.id().0).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn run_preserves_registration_order() {
        let mut registry = RuleRegistry::new();
        registry.register(mock("z", "from z"));
        registry.register(mock("a", "from a"));

        let document = WorkflowDocument::parse("name: x\n").unwrap();
        let policy = Policy::default();
        let sink = registry.run(&LintContext::new(&document, &policy));

        let messages: Vec<&str> = sink.warnings().map(|d| d.message.as_str()).collect();
        assert_eq!(messages, vec!["from z", "from a"]);
    }

    #[test]
    fn registry_default_is_empty() {
        let registry = RuleRegistry::default();
        assert!(registry.is_empty());
    }

    #[test]
    fn builtins_in_execution_order() {
        let registry = RuleRegistry::with_builtins();
        let ids: Vec<String> = registry.iter().map(|r| r.id().0).collect();

        assert_eq!(
            ids,
            vec![
                "required-keys",
                "dispatch-trigger",
                "permissions-declared",
                "jobs-defined",
                "build-job",
                "smoke-job",
                "repo-references",
            ]
        );
    }
}
