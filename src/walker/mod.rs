//! Signing-order discovery for macOS bundles.
//!
//! This module walks an application bundle and produces the list of paths a
//! code signer has to process, in an order where nothing is signed before
//! the things it contains.
//!
//! # Overview
//!
//! For every directory the walker:
//! 1. Lists the children
//! 2. Classifies each one without following symbolic links
//! 3. Deletes leftover `.cstemp` files from an interrupted signing pass
//! 4. Sniffs regular files and keeps the binary ones
//! 5. Recurses into directories, appending `.app` and `.framework`
//!    directories after their own contents
//!
//! Siblings are processed concurrently and joined before the directory
//! returns; a shared limit bounds how many of them hold files open. The per-level results form a [`Nested`] tree that is flattened
//! once at the top with [`compact_flattened_list`].
//!
//! # Example
//!
//! ```no_run
//! use kodegen_bundler_signlist::walker::BundleWalker;
//!
//! # async fn example() -> kodegen_bundler_signlist::walker::Result<()> {
//! let paths = BundleWalker::new().walk("MyApp.app/Contents").await?;
//! // Frameworks/Lib.framework/Versions/A/Lib comes before Frameworks/Lib.framework
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! - [`builder`] - [`BundleWalkerBuilder`] for injecting collaborators
//! - `classify` - entry classification and recognized extensions
//! - `error` - error type and path context helpers
//! - `fs` - idempotent filesystem primitives
//! - `reporter` - [`WalkReporter`] event capability
//! - `sniff` - content-based [`BinaryDetector`]
//! - `tree` - [`Nested`] result tree and flattening
//! - `walk` - the [`BundleWalker`] itself

pub mod builder;
mod classify;
mod error;
mod fs;
mod reporter;
mod sniff;
mod tree;
mod walk;

pub use builder::BundleWalkerBuilder;
pub use classify::{
    APP_BUNDLE_EXTENSION, EntryKind, FRAMEWORK_BUNDLE_EXTENSION, STALE_ARTIFACT_EXTENSION,
    is_bundle_dir_name,
};
pub use error::{Error, ErrorExt, Result};
pub use reporter::{LogReporter, SilentReporter, WalkReporter};
pub use sniff::{BinaryDetector, ContentSniffer, DetectFuture, SNIFF_LEN, looks_binary};
pub use tree::{Nested, compact_flattened_list};
pub use walk::{BundleWalker, DEFAULT_MAX_CONCURRENT_IO};
