//! Error types for flowgate operations.
//!
//! This module defines [`FlowgateError`], the error type for everything that
//! happens around a validation run (reading files, loading a policy), and a
//! [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Problems *in* the workflow are never errors here; they are lint
//!   diagnostics collected in a [`DiagnosticSink`](crate::lint::DiagnosticSink)
//! - Failing to read the workflow is turned into a single synthetic
//!   diagnostic by the `check` command
//! - Use `anyhow::Error` (via `FlowgateError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for flowgate operations.
#[derive(Debug, Error)]
pub enum FlowgateError {
    /// Workflow file not found at the expected location.
    #[error("File not found: {path}")]
    WorkflowNotFound { path: PathBuf },

    /// Workflow file exists but could not be read.
    #[error("Failed to read {path}: {source}")]
    WorkflowRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse a policy override file.
    #[error("Failed to parse policy at {path}: {message}")]
    PolicyParse { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for flowgate operations.
pub type Result<T> = std::result::Result<T, FlowgateError>;
