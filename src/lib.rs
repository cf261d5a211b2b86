//! `claude-code-starter-kit` - a minimal starter for a command-line tool
//!
//! The binary prints its version, prints a static help message, or calls
//! [`run`] and prints the result. New functionality goes behind [`run`];
//! new flags go into [`cli::Flag`].

pub mod cli;
pub mod error;
pub mod system;

/// Package version, taken from `Cargo.toml`
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Name printed in the version and help output
pub const NAME: &str = "claude-code-starter-kit";

/// Core functionality of the tool
///
/// Placeholder: always returns the same non-empty message.
#[must_use]
#[inline]
pub const fn run() -> &'static str {
    "Hello from claude-code-starter-kit!"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_matches_package() {
        assert_eq!(VERSION, "0.1.0");
    }

    #[test]
    fn test_run_is_stable() {
        assert!(!run().is_empty());
        assert_eq!(run(), run());
    }
}
