//! Non-empty jobs section.

use crate::lint::document::Node;
use crate::lint::{DiagnosticSink, LintContext, LintRule, RuleId, Severity};

/// Validates that `jobs` declares at least one job.
///
/// Only reports; the job rules that follow still run on their own, so an
/// empty `jobs` section also yields `Missing 'build' job` and
/// `Missing 'smoke' job`.
pub struct JobsDefinedRule;

impl LintRule for JobsDefinedRule {
    fn id(&self) -> RuleId {
        RuleId::new("jobs-defined")
    }

    fn name(&self) -> &str {
        "Jobs Defined"
    }

    fn description(&self) -> &str {
        "Ensures the jobs section declares at least one job"
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn check(&self, ctx: &LintContext<'_>, sink: &mut DiagnosticSink) {
        match ctx.document.jobs() {
            Node::Mapping(m) if !m.is_empty() => {}
            _ => sink.error(self.id(), "No jobs defined"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::rules::testing::{check, VALID_WORKFLOW};

    #[test]
    fn passes_with_jobs() {
        assert!(check(&JobsDefinedRule, VALID_WORKFLOW).is_empty());
    }

    #[test]
    fn errors_on_missing_null_or_empty_jobs() {
        for source in ["name: x\n", "jobs:\n", "jobs: {}\n", "jobs: []\n"] {
            let sink = check(&JobsDefinedRule, source);
            assert_eq!(sink.error_count(), 1, "{}", source);
            assert_eq!(sink.diagnostics()[0].message, "No jobs defined");
        }
    }
}
