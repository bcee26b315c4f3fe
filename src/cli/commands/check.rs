//! Check command implementation.
//!
//! The `flowgate check` command reads the workflow, runs the lint rules,
//! and prints the report. The exit code is 1 when any error was found.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::cli::args::CheckArgs;
use crate::config::{read_workflow, resolve_workflow_path, Policy};
use crate::error::{FlowgateError, Result};
use crate::lint::{
    validate_source, DiagnosticSink, HumanFormatter, JsonFormatter, LintFormatter, OutputFormat,
    RuleId, FILE_RULE,
};

use super::dispatcher::{Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand {
    project_root: PathBuf,
    args: CheckArgs,
    use_color: bool,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(project_root: &Path, args: CheckArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
            use_color: false,
        }
    }

    /// Enable colored human output.
    pub fn with_color(mut self, use_color: bool) -> Self {
        self.use_color = use_color;
        self
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Get the command arguments.
    pub fn args(&self) -> &CheckArgs {
        &self.args
    }

    fn load_policy(&self) -> Result<Policy> {
        match &self.args.policy {
            Some(path) => {
                let path = self.project_root.join(path);
                tracing::debug!("loading policy from {}", path.display());
                Policy::load(&path)
            }
            None => Ok(Policy::default()),
        }
    }

    /// Validate the workflow at `path`. Read failures become one error.
    fn collect(&self, path: &Path, policy: &Policy) -> Result<DiagnosticSink> {
        match read_workflow(path) {
            Ok(source) => Ok(validate_source(&source, policy)),
            Err(e @ (FlowgateError::WorkflowNotFound { .. } | FlowgateError::WorkflowRead { .. })) => {
                Ok(DiagnosticSink::from_failure(RuleId::new(FILE_RULE), e.to_string()))
            }
            Err(e) => Err(e),
        }
    }

    fn report(&self, path: &Path, sink: &DiagnosticSink, out: &mut dyn Write) -> Result<()> {
        match self.args.format {
            OutputFormat::Human => HumanFormatter::new(self.use_color)
                .strict(self.args.strict)
                .format(path, sink, out)?,
            OutputFormat::Json => JsonFormatter::new()
                .strict(self.args.strict)
                .format(path, sink, out)?,
        }
        Ok(())
    }
}

impl Command for CheckCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        let policy = self.load_policy()?;
        let path = resolve_workflow_path(&self.project_root, self.args.file.as_deref(), &policy);
        tracing::info!("validating {}", path.display());

        let sink = self.collect(&path, &policy)?;
        self.report(&path, &sink, out)?;

        tracing::debug!(
            errors = sink.error_count(),
            warnings = sink.warning_count(),
            "validation finished"
        );

        if sink.passed(self.args.strict) {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::rules::testing::VALID_WORKFLOW;
    use std::fs;
    use tempfile::TempDir;

    fn setup_project(workflow: &str) -> TempDir {
        let temp = TempDir::new().unwrap();
        let workflows = temp.path().join(".github").join("workflows");
        fs::create_dir_all(&workflows).unwrap();
        fs::write(workflows.join("smoke-test.yml"), workflow).unwrap();
        temp
    }

    fn run(temp: &TempDir, args: CheckArgs) -> (CommandResult, String) {
        let cmd = CheckCommand::new(temp.path(), args);
        let mut out = Vec::new();
        let result = cmd.execute(&mut out).unwrap();
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn check_command_creation() {
        let temp = TempDir::new().unwrap();
        let cmd = CheckCommand::new(temp.path(), CheckArgs::default());

        assert_eq!(cmd.project_root(), temp.path());
        assert!(!cmd.args().strict);
    }

    #[test]
    fn valid_workflow_passes() {
        let temp = setup_project(VALID_WORKFLOW);
        let (result, output) = run(&temp, CheckArgs::default());

        assert!(result.success);
        assert!(output.contains("smoke-test.yml"));
        assert!(output.ends_with("RESULT: PASS (0 errors, 0 warning(s))\n"));
    }

    #[test]
    fn missing_workflow_is_single_error() {
        let temp = TempDir::new().unwrap();
        let (result, output) = run(&temp, CheckArgs::default());

        assert_eq!(result.exit_code, 1);
        assert!(output.contains("Errors (1):"));
        assert!(output.contains("File not found:"));
    }

    #[test]
    fn empty_workflow_fails() {
        let temp = setup_project("");
        let (result, output) = run(&temp, CheckArgs::default());

        assert_eq!(result.exit_code, 1);
        assert!(output.contains("YAML file is empty"));
        assert!(output.ends_with("RESULT: FAIL (1 error(s), 0 warning(s))\n"));
    }

    #[test]
    fn warnings_pass_unless_strict() {
        let temp = setup_project(&VALID_WORKFLOW.replace("permissions:\n  contents: read\n", ""));

        let (result, _) = run(&temp, CheckArgs::default());
        assert!(result.success);

        let (result, _) = run(
            &temp,
            CheckArgs {
                strict: true,
                ..Default::default()
            },
        );
        assert!(!result.success);
    }

    #[test]
    fn explicit_file_overrides_default_path() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("other.yml"), VALID_WORKFLOW).unwrap();

        let (result, _) = run(
            &temp,
            CheckArgs {
                file: Some(PathBuf::from("other.yml")),
                ..Default::default()
            },
        );

        assert!(result.success);
    }

    #[test]
    fn policy_file_changes_expectations() {
        let temp = setup_project(VALID_WORKFLOW);
        fs::write(
            temp.path().join("policy.yml"),
            "expected_package: com.example.other\n",
        )
        .unwrap();

        let (result, output) = run(
            &temp,
            CheckArgs {
                policy: Some(PathBuf::from("policy.yml")),
                ..Default::default()
            },
        );

        assert!(!result.success);
        assert!(output.contains("com.example.other"));
    }

    #[test]
    fn invalid_policy_is_command_error() {
        let temp = setup_project(VALID_WORKFLOW);
        fs::write(temp.path().join("policy.yml"), "runner_family: [a\n").unwrap();

        let cmd = CheckCommand::new(
            temp.path(),
            CheckArgs {
                policy: Some(PathBuf::from("policy.yml")),
                ..Default::default()
            },
        );
        let err = cmd.execute(&mut Vec::<u8>::new()).unwrap_err();

        assert!(matches!(err, FlowgateError::PolicyParse { .. }));
    }

    #[test]
    fn json_format() {
        let temp = setup_project(VALID_WORKFLOW);
        let (result, output) = run(
            &temp,
            CheckArgs {
                format: OutputFormat::Json,
                ..Default::default()
            },
        );

        assert!(result.success);
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["summary"]["total"], 0);
        assert_eq!(parsed["summary"]["passed"], true);
    }
}
