//! Workflow file discovery and loading.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::policy::Policy;
use crate::error::{FlowgateError, Result};

/// Resolve the workflow path to validate.
///
/// An explicit path wins; relative paths are taken from `project_root`.
/// Without one, the policy's workflow path under `project_root` is used.
pub fn resolve_workflow_path(
    project_root: &Path,
    explicit: Option<&Path>,
    policy: &Policy,
) -> PathBuf {
    match explicit {
        Some(path) if path.is_absolute() => path.to_path_buf(),
        Some(path) => project_root.join(path),
        None => project_root.join(&policy.workflow_path),
    }
}

/// Read the raw workflow source.
///
/// # Errors
///
/// Returns `WorkflowNotFound` if the file does not exist and
/// `WorkflowRead` for any other IO failure.
pub fn read_workflow(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            FlowgateError::WorkflowNotFound {
                path: path.to_path_buf(),
            }
        } else {
            FlowgateError::WorkflowRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })
}
