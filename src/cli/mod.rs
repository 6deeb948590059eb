//! Command line interface for the signing-list tool.
//!
//! Parses arguments, walks the requested bundle and prints the signing
//! list in the selected format.

mod args;
mod output;

pub use args::{Args, OutputFormat, RuntimeConfig};
pub use output::OutputManager;

use crate::error::{CliError, Result};
use crate::walker::BundleWalker;

/// Runs a parsed invocation and returns the process exit code
pub async fn execute(args: &Args) -> Result<i32> {
    args.validate()
        .map_err(|reason| CliError::InvalidArguments { reason })?;

    let config = RuntimeConfig::from(args);
    let walker = BundleWalker::new();

    let paths = if config.include_target() {
        walker.signing_order(&args.path).await?
    } else {
        walker.walk(&args.path).await?
    };

    log::info!(
        "{} paths to sign under {}",
        paths.len(),
        args.path.display()
    );
    config.output().print_paths(&paths)?;
    Ok(0)
}
