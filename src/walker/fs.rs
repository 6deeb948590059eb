//! Filesystem primitives used by the walker.
//!
//! Thin wrappers over `tokio::fs` that attach path context to errors and
//! make deletion idempotent.

use super::error::{ErrorExt, Result};
use path_absolutize::Absolutize;
use std::{
    fs::Metadata,
    io,
    path::{Path, PathBuf},
};
use tokio::fs;

/// Lists the immediate children of `dir` as absolute paths.
///
/// Order is whatever the filesystem returns.
pub async fn list_dir(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut entries = fs::read_dir(dir)
        .await
        .fs_context("failed to list directory", dir)?;

    let mut children = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .fs_context("failed to read directory entry", dir)?
    {
        children.push(dir.join(entry.file_name()));
    }
    Ok(children)
}

/// Returns the metadata of `path` without following a final symbolic link.
pub async fn lstat(path: &Path) -> Result<Metadata> {
    fs::symlink_metadata(path)
        .await
        .fs_context("failed to stat entry", path)
}

/// Removes a file, treating an already missing file as success.
pub async fn remove_file_if_exists(path: &Path) -> Result<()> {
    match fs::remove_file(path).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()), // Idempotent
        Err(e) => Err(e).fs_context("failed to remove stale artifact", path),
    }
}

/// Resolves `path` against the current directory without touching the
/// filesystem. Symbolic links in the path are left as they are.
pub fn absolute(path: &Path) -> Result<PathBuf> {
    let abs = path
        .absolutize()
        .fs_context("failed to resolve absolute path", path)?;
    Ok(abs.into_owned())
}
