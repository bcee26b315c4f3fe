//! Required top-level keys.
//!
//! This rule ensures the workflow declares `name`, `on` and `jobs`.

use crate::lint::document::TRIGGER_KEY;
use crate::lint::{DiagnosticSink, LintContext, LintDiagnostic, LintRule, RuleId, Severity};

const REQUIRED_KEYS: [&str; 3] = ["name", TRIGGER_KEY, "jobs"];

/// Validates that the mandatory top-level keys are present.
pub struct RequiredKeysRule;

impl LintRule for RequiredKeysRule {
    fn id(&self) -> RuleId {
        RuleId::new("required-keys")
    }

    fn name(&self) -> &str {
        "Required Keys"
    }

    fn description(&self) -> &str {
        "Ensures the workflow declares name, on and jobs"
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn check(&self, ctx: &LintContext<'_>, sink: &mut DiagnosticSink) {
        for key in REQUIRED_KEYS {
            if !ctx.document.contains(key) {
                sink.push(
                    LintDiagnostic::new(
                        self.id(),
                        self.default_severity(),
                        format!("Missing required top-level key: '{}'", key),
                    )
                    .with_suggestion(format!("Add a top-level `{}:` section", key)),
                );
            }
        }
    }
}
