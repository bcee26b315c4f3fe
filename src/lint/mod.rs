//! Workflow validation and linting.
//!
//! This module validates the smoke-test workflow through an ordered,
//! rule-based system.
//!
//! # Overview
//!
//! The lint system consists of:
//!
//! - **Document** - The parsed, normalized workflow ([`WorkflowDocument`], [`Node`])
//! - **Rules** - Individual validation checks ([`LintRule`] trait)
//! - **Registry** - The ordered collection of rules ([`RuleRegistry`])
//! - **Diagnostics** - Issue reports and their accumulator ([`LintDiagnostic`], [`DiagnosticSink`])
//! - **Output** - Report rendering ([`HumanFormatter`], [`JsonFormatter`])
//!
//! # Example
//!
//! ```
//! use flowgate::config::Policy;
//! use flowgate::lint::{validate_source, Severity};
//!
//! let sink = validate_source("name: Smoke\n", &Policy::default());
//!
//! assert!(sink.has_errors());
//! assert_eq!(
//!     sink.diagnostics()[0].message,
//!     "Missing required top-level key: 'on'"
//! );
//! assert!(Severity::Warning < Severity::Error);
//! ```

pub mod diagnostic;
pub mod document;
pub mod output;
pub mod registry;
pub mod rule;
pub mod rules;
pub mod validate;
pub mod view;

pub use diagnostic::{DiagnosticSink, LintDiagnostic};
pub use document::{DocumentError, Node, WorkflowDocument};
pub use output::{HumanFormatter, JsonFormatter, LintFormatter, OutputFormat};
pub use registry::RuleRegistry;
pub use rule::{LintContext, LintRule, RuleId, Severity};
pub use rules::{
    BuildJobRule, DispatchTriggerRule, JobsDefinedRule, PermissionsRule, RepoReferencesRule,
    RequiredKeysRule, SmokeJobRule,
};
pub use validate::{validate_source, validate_with, FILE_RULE, SYNTAX_RULE};
pub use view::{JobView, StepView};
