//! Shared fixtures for walker integration tests

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use kodegen_bundler_signlist::walker::WalkReporter;

/// Leading bytes of a 64-bit little-endian Mach-O executable
pub const MACHO_HEADER: &[u8] = &[
    0xcf, 0xfa, 0xed, 0xfe, 0x0c, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x02, 0x00, 0x00,
    0x00, 0x10, 0x00, 0x00, 0x00, 0x48, 0x06, 0x00, 0x00, 0x85, 0x00, 0x20, 0x00,
];

/// Plain text resource content
pub const PLIST_TEXT: &[u8] = b"<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<plist version=\"1.0\">\n<dict/>\n</plist>\n";

/// Writes `content` to `root/rel`, creating parent directories
pub fn write(root: &Path, rel: &str, content: &[u8]) -> PathBuf {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&path, content).unwrap();
    path
}

/// Creates `root/rel` and its parents
pub fn mkdir(root: &Path, rel: &str) -> PathBuf {
    let path = root.join(rel);
    std::fs::create_dir_all(&path).unwrap();
    path
}

/// Builds a small app bundle under `root`:
///
/// ```text
/// App.app/Contents/Info.plist                              (text)
/// App.app/Contents/MacOS/AppBinary                         (binary)
/// App.app/Contents/Frameworks/Lib.framework/Versions/A/Lib (binary)
/// App.app/Contents/Frameworks/Lib.framework/Resources/Info.plist (text)
/// ```
pub fn sample_app(root: &Path) -> PathBuf {
    let app = root.join("App.app");
    write(&app, "Contents/Info.plist", PLIST_TEXT);
    write(&app, "Contents/MacOS/AppBinary", MACHO_HEADER);
    write(
        &app,
        "Contents/Frameworks/Lib.framework/Versions/A/Lib",
        MACHO_HEADER,
    );
    write(
        &app,
        "Contents/Frameworks/Lib.framework/Resources/Info.plist",
        PLIST_TEXT,
    );
    app
}

/// Position of `path` in `list`, panicking with the list if absent
pub fn position(list: &[PathBuf], path: &Path) -> usize {
    list.iter()
        .position(|p| p == path)
        .unwrap_or_else(|| panic!("{} not in {:#?}", path.display(), list))
}

/// Canonical form of a temp dir, so comparisons survive /tmp symlinks
pub fn canonical_tempdir() -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().canonicalize().unwrap();
    (dir, root)
}

/// Reporter that records skipped entries and removed artifacts
#[derive(Default)]
pub struct RecordingReporter {
    pub skipped: Mutex<Vec<PathBuf>>,
    pub removed: Mutex<Vec<PathBuf>>,
    pub entered: Mutex<Vec<PathBuf>>,
}

impl WalkReporter for RecordingReporter {
    fn entering_dir(&self, path: &Path) {
        self.entered.lock().unwrap().push(path.to_path_buf());
    }

    fn removed_stale_artifact(&self, path: &Path) {
        self.removed.lock().unwrap().push(path.to_path_buf());
    }

    fn skipped(&self, path: &Path) {
        self.skipped.lock().unwrap().push(path.to_path_buf());
    }
}
