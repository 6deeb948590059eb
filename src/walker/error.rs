//! Error types for bundle traversal.

use std::{io, path::PathBuf};
use thiserror::Error;

/// Result type alias for walker operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while collecting signing targets.
///
/// Every variant aborts the walk for the current root. No partial list is
/// ever returned alongside an error.
#[derive(Error, Debug)]
pub enum Error {
    /// A filesystem operation failed on a specific path.
    #[error("{context} `{}`: {source}", path.display())]
    Fs {
        /// What the walker was doing when the operation failed
        context: &'static str,
        /// Path the operation was applied to
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// A sibling task panicked or was cancelled by the runtime.
    #[error("walk task failed: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),

    /// Generic error with a message.
    #[error("{0}")]
    GenericError(String),
}

impl Error {
    /// Returns the path the error relates to, if any.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::Fs { path, .. } => Some(path),
            _ => None,
        }
    }
}

/// Attaches path context to fallible filesystem calls.
pub trait ErrorExt<T> {
    /// Converts an `io::Result` into a walker [`Result`] carrying `context`
    /// and the path the operation touched.
    fn fs_context(self, context: &'static str, path: impl Into<PathBuf>) -> Result<T>;
}

impl<T> ErrorExt<T> for std::result::Result<T, io::Error> {
    fn fs_context(self, context: &'static str, path: impl Into<PathBuf>) -> Result<T> {
        self.map_err(|source| Error::Fs {
            context,
            path: path.into(),
            source,
        })
    }
}

/// Returns early with [`Error::GenericError`] built from a format string.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::walker::Error::GenericError(format!($($arg)*)))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fs_context_keeps_path_and_source() {
        let res: std::result::Result<(), io::Error> =
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
        let err = res
            .fs_context("failed to list directory", "/tmp/App.app")
            .unwrap_err();

        assert_eq!(err.path(), Some(std::path::Path::new("/tmp/App.app")));
        let msg = err.to_string();
        assert!(msg.contains("failed to list directory"));
        assert!(msg.contains("/tmp/App.app"));
        assert!(msg.contains("denied"));
    }
}
