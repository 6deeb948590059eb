//! Signing-order discovery for macOS application bundles
//!
//! This library walks a `.app` bundle and produces the ordered list of paths
//! a code signer must process:
//! - every binary file, detected by content rather than by name
//! - every nested `.app` and `.framework` bundle, listed after its contents
//!
//! Leftover `.cstemp` files from an interrupted signing pass are deleted
//! during the walk. It can be used both as a CLI tool and as a library
//! dependency.

pub mod cli;
pub mod error;
pub mod walker;

// Re-export commonly used types
pub use error::{CliError, Result, SignListError};
pub use walker::{BundleWalker, BundleWalkerBuilder, Nested, compact_flattened_list};
