//! Build job validation.
//!
//! The `build` job must produce the debug APK the smoke job installs:
//! checkout, a JDK, Gradle, `assembleDebug`, and an artifact upload.

use crate::lint::{DiagnosticSink, LintContext, LintRule, RuleId, Severity};

const JOB: &str = "build";
const CHECKOUT_ACTION: &str = "actions/checkout";
const SETUP_JAVA_ACTION: &str = "actions/setup-java";
const UPLOAD_ACTION: &str = "actions/upload-artifact";
const GRADLE_TOKEN: &str = "gradle";
const GRADLE_WRAPPER: &str = "gradlew";
const BUILD_TARGET: &str = "assembleDebug";

/// Validates the steps and runner of the `build` job.
pub struct BuildJobRule;

impl LintRule for BuildJobRule {
    fn id(&self) -> RuleId {
        RuleId::new("build-job")
    }

    fn name(&self) -> &str {
        "Build Job"
    }

    fn description(&self) -> &str {
        "Ensures the build job checks out, sets up a JDK and Gradle, assembles and uploads the debug APK"
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn check(&self, ctx: &LintContext<'_>, sink: &mut DiagnosticSink) {
        let Some(job) = ctx.document.job(JOB) else {
            sink.error(self.id(), format!("Missing '{}' job", JOB));
            return;
        };
        let policy = ctx.policy;

        let runs_on = job.runs_on().text();
        if !runs_on.contains(&policy.runner_family) {
            sink.warning(
                self.id(),
                format!(
                    "Build job runs-on '{}' (expected {}-based runner)",
                    runs_on, policy.runner_family
                ),
            );
        }

        if !job.uses_action(CHECKOUT_ACTION) {
            sink.error(
                self.id(),
                format!("Build job missing {} step", CHECKOUT_ACTION),
            );
        }

        if !job.uses_action(SETUP_JAVA_ACTION) {
            sink.error(
                self.id(),
                format!("Build job missing {} step", SETUP_JAVA_ACTION),
            );
        }

        for step in job.steps() {
            if !step.uses().contains(SETUP_JAVA_ACTION) {
                continue;
            }
            let version = step.with_param("java-version").text();
            if !version.is_empty() && !policy.accepts_jdk(&version) {
                sink.warning(self.id(), format!("Unusual JDK version: {}", version));
            }
        }

        let has_gradle_action = job
            .steps()
            .any(|step| step.uses().to_lowercase().contains(GRADLE_TOKEN));
        if !has_gradle_action && !job.runs_command(GRADLE_WRAPPER) {
            sink.error(
                self.id(),
                "Build job missing Gradle setup or gradlew invocation",
            );
        }

        if !job.runs_command(BUILD_TARGET) {
            sink.error(
                self.id(),
                format!("Build job doesn't run {}", BUILD_TARGET),
            );
        }

        if !job.uses_action(UPLOAD_ACTION) {
            sink.error(self.id(), "Build job missing artifact upload step");
        }
    }
}
