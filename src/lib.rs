//! flowgate - Static policy validation for the smoke-test CI workflow.
//!
//! flowgate inspects the declared shape of a GitHub Actions workflow
//! without running it: trigger, permissions, the `build` and `smoke` jobs,
//! and the repository references in the raw text. It is meant as a
//! pre-merge gate, so any error yields a non-zero exit code.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Validation policy and workflow loading
//! - [`error`] - Error types and result aliases
//! - [`lint`] - Document model, rules, diagnostics and report formatting
//!
//! # Example
//!
//! ```
//! use flowgate::config::Policy;
//! use flowgate::lint::validate_source;
//!
//! let sink = validate_source("- not\n- a mapping\n", &Policy::default());
//! assert_eq!(sink.error_count(), 1);
//! assert!(!sink.passed(false));
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod lint;

pub use error::{FlowgateError, Result};
