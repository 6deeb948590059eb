//! Walk progress reporting.

use std::path::Path;

/// Receives notable events while a walk is in progress.
///
/// The walker never touches a global logger; it reports through the
/// capability it was built with. All methods default to no-ops so an
/// implementation only overrides what it cares about. Calls may arrive
/// concurrently from sibling tasks.
pub trait WalkReporter: Send + Sync {
    /// A directory is about to be listed.
    fn entering_dir(&self, _path: &Path) {}

    /// A leftover `.cstemp` file was deleted (or was already gone).
    fn removed_stale_artifact(&self, _path: &Path) {}

    /// A binary file was added to the signing list.
    fn found_binary(&self, _path: &Path) {}

    /// A bundle directory was added after its contents.
    fn found_bundle(&self, _path: &Path) {}

    /// A symbolic link or special file was skipped.
    fn skipped(&self, _path: &Path) {}
}

/// Reporter that forwards events to the `log` facade at debug level.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogReporter;

impl WalkReporter for LogReporter {
    fn entering_dir(&self, path: &Path) {
        log::debug!("Walking {}", path.display());
    }

    fn removed_stale_artifact(&self, path: &Path) {
        log::debug!("Removed stale signing artifact {}", path.display());
    }

    fn found_binary(&self, path: &Path) {
        log::debug!("  + binary {}", path.display());
    }

    fn found_bundle(&self, path: &Path) {
        log::debug!("  + bundle {}", path.display());
    }

    fn skipped(&self, path: &Path) {
        log::debug!("  - skipped {}", path.display());
    }
}

/// Reporter that discards every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct SilentReporter;

impl WalkReporter for SilentReporter {}
