//! Expected values for workflow validation.
//!
//! A [`Policy`] carries everything the built-in rules compare the workflow
//! against. The defaults describe the MediaMaid smoke-test workflow; a YAML
//! file can override any subset of fields.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::error::{FlowgateError, Result};

/// Workflow location relative to the project root.
pub const DEFAULT_WORKFLOW_PATH: &str = ".github/workflows/smoke-test.yml";

/// Expected values the lint rules check the workflow against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Policy {
    /// Workflow path, relative to the project root.
    pub workflow_path: PathBuf,

    /// The only `owner/name` repository reference allowed in the workflow.
    pub expected_repo: String,

    /// Application id the smoke job must install and launch.
    pub expected_package: String,

    /// Substring the build job's `runs-on` must contain.
    pub runner_family: String,

    /// Accepted `java-version` values for `actions/setup-java`.
    pub jdk_versions: Vec<String>,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            workflow_path: PathBuf::from(DEFAULT_WORKFLOW_PATH),
            expected_repo: "maceip/MediaMaid".to_string(),
            expected_package: "ai.musicconverter".to_string(),
            runner_family: "ubuntu".to_string(),
            jdk_versions: vec!["17".to_string(), "21".to_string()],
        }
    }
}

impl Policy {
    /// Load a policy override file.
    ///
    /// Fields missing from the file keep their default values. An empty
    /// file yields the default policy.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read policy file {}", path.display()))?;
        Self::parse(&content, path)
    }

    /// Parse policy YAML. `source_path` is only used for error reporting.
    pub fn parse(content: &str, source_path: &Path) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let policy: Self =
            serde_yaml::from_str(content).map_err(|e| FlowgateError::PolicyParse {
                path: source_path.to_path_buf(),
                message: e.to_string(),
            })?;

        if !policy.has_valid_repo() {
            return Err(FlowgateError::PolicyParse {
                path: source_path.to_path_buf(),
                message: format!(
                    "expected_repo must be 'owner/name', got '{}'",
                    policy.expected_repo
                ),
            });
        }

        Ok(policy)
    }

    /// Whether `expected_repo` has a non-empty owner and name.
    fn has_valid_repo(&self) -> bool {
        matches!(
            self.expected_repo.split_once('/'),
            Some((owner, name)) if !owner.is_empty() && !name.is_empty() && !name.contains('/')
        )
    }

    /// The owner half of [`Policy::expected_repo`].
    pub fn repo_owner(&self) -> &str {
        self.expected_repo
            .split_once('/')
            .map_or(self.expected_repo.as_str(), |(owner, _)| owner)
    }

    /// Whether `version` is one of the accepted JDK versions.
    pub fn accepts_jdk(&self, version: &str) -> bool {
        self.jdk_versions.iter().any(|v| v == version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_policy_values() {
        let policy = Policy::default();

        assert_eq!(policy.workflow_path, PathBuf::from(DEFAULT_WORKFLOW_PATH));
        assert_eq!(policy.expected_package, "ai.musicconverter");
        assert_eq!(policy.runner_family, "ubuntu");
        assert_eq!(policy.jdk_versions, vec!["17", "21"]);
    }

    #[test]
    fn repo_owner_splits_on_slash() {
        let policy = Policy::default();
        assert_eq!(policy.repo_owner(), "maceip");
    }

    #[test]
    fn malformed_expected_repo_is_rejected() {
        for repo in ["/x", "x/", "standalone", "a/b/c", ""] {
            let yaml = format!("expected_repo: \"{}\"\n", repo);
            let err = Policy::parse(&yaml, Path::new("policy.yml")).unwrap_err();
            assert!(matches!(err, FlowgateError::PolicyParse { .. }), "{}", repo);
            assert!(err.to_string().contains("owner/name"), "{}", repo);
        }
    }

    #[test]
    fn well_formed_expected_repo_is_accepted() {
        let policy = Policy::parse("expected_repo: octo-org/app_1\n", Path::new("p.yml")).unwrap();
        assert_eq!(policy.repo_owner(), "octo-org");
    }

    #[test]
    fn accepts_only_listed_jdk_versions() {
        let policy = Policy::default();
        assert!(policy.accepts_jdk("17"));
        assert!(policy.accepts_jdk("21"));
        assert!(!policy.accepts_jdk("11"));
        assert!(!policy.accepts_jdk("17.0"));
    }

    #[test]
    fn partial_override_keeps_defaults() {
        let yaml = r#"
expected_package: com.example.app
jdk_versions: ["21"]
"#;
        let policy = Policy::parse(yaml, Path::new("policy.yml")).unwrap();

        assert_eq!(policy.expected_package, "com.example.app");
        assert_eq!(policy.jdk_versions, vec!["21"]);
        assert_eq!(policy.expected_repo, "maceip/MediaMaid");
    }

    #[test]
    fn empty_file_is_default_policy() {
        let policy = Policy::parse("  \n", Path::new("policy.yml")).unwrap();
        assert_eq!(policy, Policy::default());
    }

    #[test]
    fn unknown_field_is_rejected() {
        let err = Policy::parse("expected_repoo: x/y\n", Path::new("policy.yml")).unwrap_err();
        assert!(matches!(err, FlowgateError::PolicyParse { .. }));
        assert!(err.to_string().contains("policy.yml"));
    }

    #[test]
    fn load_reads_from_disk() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("policy.yml");
        fs::write(&path, "runner_family: macos\n").unwrap();

        let policy = Policy::load(&path).unwrap();

        assert_eq!(policy.runner_family, "macos");
    }

    #[test]
    fn load_missing_file_names_the_policy() {
        let temp = TempDir::new().unwrap();
        let err = Policy::load(&temp.path().join("nope.yml")).unwrap_err();
        assert!(matches!(err, FlowgateError::Other(_)));
        assert!(err.to_string().contains("Failed to read policy file"));
        assert!(err.to_string().contains("nope.yml"));
    }
}
