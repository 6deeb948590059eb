//! Command line argument parsing and validation.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for the signing list
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One absolute path per line
    #[default]
    Text,
    /// JSON array of path strings
    Json,
}

/// Lists the paths inside a macOS bundle that need code signing
#[derive(Parser, Debug)]
#[command(
    name = "kodegen_signlist",
    version,
    about = "Lists the paths inside a macOS bundle that need code signing",
    long_about = "Walks a macOS .app bundle and prints every binary file and nested
.app/.framework bundle that needs signing, innermost first.

Leftover *.cstemp files from an interrupted signing pass are deleted.

Usage:
  kodegen_signlist target/release/bundle/osx/MyApp.app
  kodegen_signlist --format json MyApp.app
  kodegen_signlist --walk-only MyApp.app/Contents

Exit code 0 = the list is complete. Any error yields no list at all."
)]
pub struct Args {
    /// Bundle or directory to walk
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text, env = "SIGNLIST_FORMAT")]
    pub format: OutputFormat,

    /// Do not append PATH itself, even when it is a bundle
    #[arg(long)]
    pub walk_only: bool,

    /// Log every visited entry
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.path.as_os_str().is_empty() {
            return Err("Path cannot be empty".to_string());
        }

        if !self.path.is_dir() {
            return Err(format!("Not a directory: {}", self.path.display()));
        }

        Ok(())
    }
}

/// Configuration derived from command line arguments
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Output manager for the signing list
    output: super::OutputManager,
    /// Whether the target itself is appended
    include_target: bool,
}

impl From<&Args> for RuntimeConfig {
    fn from(args: &Args) -> Self {
        Self {
            output: super::OutputManager::new(args.format),
            include_target: !args.walk_only,
        }
    }
}

impl RuntimeConfig {
    /// Get a reference to the output manager
    pub fn output(&self) -> &super::OutputManager {
        &self.output
    }

    /// Whether the walked path itself should end the list
    pub fn include_target(&self) -> bool {
        self.include_target
    }
}
