//! # `claude-code-starter-kit`
//!
//! Minimal command-line starter. Prints the version, a usage block, or the
//! result of the core function.
//!
//! ## Usage
//!
//! ```sh
//! claude-code-starter-kit            # run the core function
//! claude-code-starter-kit --version  # or -v
//! claude-code-starter-kit --help     # or -h
//! ```
//!
//! Diagnostics go to stderr and are controlled by `RUST_LOG`.

use claude_code_starter_kit::cli::dispatch;
use claude_code_starter_kit::error::StarterError;
use claude_code_starter_kit::system::RealSystem;
use tracing::error;
use tracing_subscriber::{EnvFilter, fmt};

fn main() {
    // Stdout carries the program output, so logs go to stderr
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    let system = RealSystem::new();
    match dispatch(&system) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            error!("{}", err);
            std::process::exit(
                err.downcast_ref::<StarterError>()
                    .map_or(1, StarterError::exit_code),
            );
        }
    }
}
