//! Built-in lint rules.
//!
//! This module contains the validation rules for the smoke-test workflow.
//! [`RuleRegistry::with_builtins`](crate::lint::RuleRegistry::with_builtins)
//! registers them in their execution order.

pub mod build_job;
pub mod dispatch_trigger;
pub mod jobs_defined;
pub mod permissions;
pub mod repo_references;
pub mod required_keys;
pub mod smoke_job;

pub use build_job::BuildJobRule;
pub use dispatch_trigger::DispatchTriggerRule;
pub use jobs_defined::JobsDefinedRule;
pub use permissions::PermissionsRule;
pub use repo_references::RepoReferencesRule;
pub use required_keys::RequiredKeysRule;
pub use smoke_job::SmokeJobRule;
