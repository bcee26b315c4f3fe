//! Validation policy and workflow file loading.
//!
//! This module handles the inputs of a validation run:
//! - The [`Policy`] the rules compare the workflow against, in [`policy`]
//! - Locating and reading the workflow source, in [`loader`]
//!
//! # Example
//!
//! ```
//! use flowgate::config::Policy;
//!
//! let policy = Policy::default();
//! assert_eq!(policy.expected_repo, "maceip/MediaMaid");
//! assert_eq!(policy.repo_owner(), "maceip");
//! ```
//!
//! # Workflow Location
//!
//! The workflow is read from `.github/workflows/smoke-test.yml` under the
//! project root unless the policy or the `--file` flag says otherwise.

pub mod loader;
pub mod policy;

pub use loader::{read_workflow, resolve_workflow_path};
pub use policy::{Policy, DEFAULT_WORKFLOW_PATH};
