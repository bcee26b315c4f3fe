//! Explicit permissions check.
//!
//! Without a `permissions` block the workflow token gets the repository's
//! default scopes, which are usually broader than a smoke test needs.

use crate::lint::document::Node;
use crate::lint::{DiagnosticSink, LintContext, LintDiagnostic, LintRule, RuleId, Severity};

/// Warns when the workflow does not declare its token permissions.
pub struct PermissionsRule;

impl LintRule for PermissionsRule {
    fn id(&self) -> RuleId {
        RuleId::new("permissions-declared")
    }

    fn name(&self) -> &str {
        "Permissions Declared"
    }

    fn description(&self) -> &str {
        "Warns when no top-level permissions block is declared"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, ctx: &LintContext<'_>, sink: &mut DiagnosticSink) {
        let undeclared = match ctx.document.get("permissions") {
            Node::Absent => true,
            Node::Mapping(m) => m.is_empty(),
            node => node.is_null(),
        };

        if undeclared {
            sink.push(
                LintDiagnostic::new(
                    self.id(),
                    self.default_severity(),
                    "No permissions block defined (defaults to broad permissions)",
                )
                .with_suggestion("Add `permissions:` with `contents: read`"),
            );
        }
    }
}
