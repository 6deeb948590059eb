//! Filesystem entry classification.

use std::{fs::Metadata, path::Path};

/// Extension of temporary files left behind by an interrupted signing pass.
pub const STALE_ARTIFACT_EXTENSION: &str = "cstemp";

/// Extension of application bundle directories.
pub const APP_BUNDLE_EXTENSION: &str = "app";

/// Extension of framework bundle directories.
pub const FRAMEWORK_BUNDLE_EXTENSION: &str = "framework";

/// How the walker treats a single directory entry.
///
/// Regular files that are not stale artifacts are all `Candidate`; whether
/// they end up in the signing list is decided by content, not by name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryKind {
    /// Regular file whose content still has to be sniffed.
    Candidate,
    /// Leftover `.cstemp` file to delete.
    StaleArtifact,
    /// Plain directory, contributes only its descendants.
    Directory,
    /// `.app` or `.framework` directory, signed after its descendants.
    Bundle,
    /// Symbolic link to anything. Never followed.
    Symlink,
    /// Sockets, fifos, devices.
    Other,
}

impl EntryKind {
    /// Classifies `path` from metadata obtained without following links.
    pub fn classify(path: &Path, metadata: &Metadata) -> Self {
        let file_type = metadata.file_type();
        if file_type.is_symlink() {
            Self::Symlink
        } else if file_type.is_file() {
            if has_extension(path, STALE_ARTIFACT_EXTENSION) {
                Self::StaleArtifact
            } else {
                Self::Candidate
            }
        } else if file_type.is_dir() {
            if is_bundle_dir_name(path) {
                Self::Bundle
            } else {
                Self::Directory
            }
        } else {
            Self::Other
        }
    }
}

/// Returns `true` if `path` carries an `.app` or `.framework` extension.
///
/// Only the name is inspected; callers must check that the entry is a real
/// directory.
pub fn is_bundle_dir_name(path: &Path) -> bool {
    has_extension(path, APP_BUNDLE_EXTENSION) || has_extension(path, FRAMEWORK_BUNDLE_EXTENSION)
}

fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension().is_some_and(|e| e == ext)
}
