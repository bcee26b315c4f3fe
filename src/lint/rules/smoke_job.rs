//! Smoke job validation.
//!
//! The `smoke` job installs the APK built by `build` on an emulator,
//! launches it, and scans logcat for crashes.

use crate::lint::{DiagnosticSink, LintContext, LintDiagnostic, LintRule, RuleId, Severity};

const JOB: &str = "smoke";
const BUILD_JOB: &str = "build";
const DOWNLOAD_ACTION: &str = "actions/download-artifact";
const WAIT_FOR_DEVICE: &str = "adb wait-for-device";
const INSTALL: &str = "adb install";
const LAUNCH: &str = "adb shell am start";
const CRASH_SIGNATURE: &str = "FATAL EXCEPTION";

/// Validates the dependency and steps of the `smoke` job.
pub struct SmokeJobRule;

impl LintRule for SmokeJobRule {
    fn id(&self) -> RuleId {
        RuleId::new("smoke-job")
    }

    fn name(&self) -> &str {
        "Smoke Job"
    }

    fn description(&self) -> &str {
        "Ensures the smoke job depends on build, installs and launches the app, and checks for crashes"
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn check(&self, ctx: &LintContext<'_>, sink: &mut DiagnosticSink) {
        let Some(job) = ctx.document.job(JOB) else {
            sink.error(self.id(), format!("Missing '{}' job", JOB));
            return;
        };

        if !job.needs().iter().any(|n| n == BUILD_JOB) {
            sink.push(
                LintDiagnostic::new(
                    self.id(),
                    Severity::Error,
                    "Smoke job must depend on 'build' job (needs: build)",
                )
                .with_suggestion("Add `needs: build` to the smoke job"),
            );
        }

        if !job.uses_action(DOWNLOAD_ACTION) {
            sink.error(self.id(), "Smoke job missing artifact download step");
        }

        if !job.runs_command(WAIT_FOR_DEVICE) {
            sink.warning(
                self.id(),
                format!("Smoke job should wait for emulator ({})", WAIT_FOR_DEVICE),
            );
        }

        if !job.runs_command(INSTALL) {
            sink.error(
                self.id(),
                format!("Smoke job missing APK install step ({})", INSTALL),
            );
        }

        if !job.runs_command(LAUNCH) {
            sink.error(
                self.id(),
                format!("Smoke job missing app launch step ({})", LAUNCH),
            );
        }

        if !job.runs_command(CRASH_SIGNATURE) {
            sink.warning(
                self.id(),
                format!("Smoke job should check for {} in logcat", CRASH_SIGNATURE),
            );
        }

        let package = &ctx.policy.expected_package;
        if !job.run_text().contains(package.as_str()) {
            sink.error(
                self.id(),
                format!("Smoke job doesn't reference expected package '{}'", package),
            );
        }
    }
}
