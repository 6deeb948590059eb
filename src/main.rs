//! Kodegen Signlist - signing-order discovery for macOS bundles.
//!
//! This binary prints every path inside a bundle that needs code signing,
//! innermost first, and removes stale signing leftovers on the way.

use kodegen_bundler_signlist::cli::{self, Args};
use std::process;

#[tokio::main]
async fn main() {
    let args = Args::parse_args();

    // Initialize logging; RUST_LOG wins over --verbose
    let default_filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    // Run CLI and get exit code
    let exit_code = match cli::execute(&args).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            for suggestion in e.recovery_suggestions() {
                eprintln!("  hint: {}", suggestion);
            }
            1
        }
    };

    process::exit(exit_code);
}
