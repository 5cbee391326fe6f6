//! Error types for the confgen CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for confgen operations.
///
/// One variant per failure mode: the template file is absent, workspace
/// auto-detection found no qualifying ancestor, a read or write failed, or
/// the rendered text is not valid YAML.
#[derive(Error, Debug)]
pub enum ConfgenError {
    /// The config template does not exist at the expected path.
    #[error("config template not found: {0}")]
    TemplateMissing(PathBuf),

    /// No ancestor directory satisfies the workspace marker heuristic.
    #[error(
        "could not auto-detect workspace root (searched upward from {0}); \
         pass the workspace root as the second argument"
    )]
    WorkspaceDetection(PathBuf),

    /// A filesystem read or write failed.
    #[error("{0}")]
    Filesystem(String),

    /// The rendered config is not valid structured YAML.
    #[error("failed to parse generated config: {0}")]
    Parse(String),
}

impl ConfgenError {
    /// Returns the process exit code for this error.
    ///
    /// Every failure mode maps to the same non-zero status; the CLI does not
    /// distinguish error kinds by exit code.
    pub fn exit_code(&self) -> i32 {
        exit_codes::FAILURE
    }
}

/// Result type alias for confgen operations.
pub type Result<T> = std::result::Result<T, ConfgenError>;
