//! Top-level error types for the signing-list tool.
//!
//! Library callers mostly deal with [`crate::walker::Error`]; this module
//! wraps it together with CLI argument and output failures.

use thiserror::Error;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, SignListError>;

/// Main error type for the signing-list tool
#[derive(Error, Debug)]
pub enum SignListError {
    /// CLI argument errors
    #[error("CLI error: {0}")]
    Cli(#[from] CliError),

    /// Bundle walk errors
    #[error("Walk error: {0}")]
    Walk(#[from] crate::walker::Error),

    /// Output errors, with context from anyhow
    #[error("{0:#}")]
    Anyhow(#[from] anyhow::Error),
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid command line arguments
    #[error("Invalid arguments: {reason}")]
    InvalidArguments {
        /// Reason for the error
        reason: String,
    },
}

impl SignListError {
    /// Get actionable recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<String> {
        match self {
            Self::Walk(crate::walker::Error::Fs { source, .. })
                if source.kind() == std::io::ErrorKind::PermissionDenied =>
            {
                vec![
                    "Check that every directory inside the bundle is readable".to_string(),
                    "Re-run as the user that owns the bundle".to_string(),
                ]
            }
            Self::Walk(_) => vec![
                "Make sure no other process is modifying the bundle while it is scanned"
                    .to_string(),
            ],
            Self::Cli(_) => vec!["Run with --help to see the expected arguments".to_string()],
            Self::Anyhow(_) => {
                vec!["Check the error message above for specific details".to_string()]
            }
        }
    }
}
