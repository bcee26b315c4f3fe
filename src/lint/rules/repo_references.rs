//! Repository reference consistency.
//!
//! Scans the raw source rather than the parsed tree, so references in
//! comments and free-form strings are caught too.

use regex::Regex;

use crate::lint::{DiagnosticSink, LintContext, LintDiagnostic, LintRule, RuleId, Severity};

/// Flags `owner/name` references that point at the wrong repository.
pub struct RepoReferencesRule;

impl RepoReferencesRule {
    fn pattern(owner: &str) -> Result<Regex, regex::Error> {
        Regex::new(&format!(r"{}/[\w-]+", regex::escape(owner)))
    }
}

impl LintRule for RepoReferencesRule {
    fn id(&self) -> RuleId {
        RuleId::new("repo-references")
    }

    fn name(&self) -> &str {
        "Repository References"
    }

    fn description(&self) -> &str {
        "Ensures every owner/repo reference points at the expected repository"
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn check(&self, ctx: &LintContext<'_>, sink: &mut DiagnosticSink) {
        let expected = ctx.policy.expected_repo.as_str();
        let pattern = match Self::pattern(ctx.policy.repo_owner()) {
            Ok(pattern) => pattern,
            Err(e) => {
                sink.error(self.id(), format!("Invalid repository pattern: {}", e));
                return;
            }
        };

        for found in pattern.find_iter(ctx.document.source()) {
            let found = found.as_str();
            if found != expected {
                sink.push(
                    LintDiagnostic::new(
                        self.id(),
                        self.default_severity(),
                        format!(
                            "Incorrect repo reference '{}', expected '{}'",
                            found, expected
                        ),
                    )
                    .with_suggestion(format!("Replace '{}' with '{}'", found, expected)),
                );
            }
        }
    }
}
