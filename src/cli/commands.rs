//! CLI command implementations

use crate::cli::Action;
use crate::error::StarterError;
use crate::system::System;
use crate::{NAME, VERSION, run};
use anyhow::Result;
use std::io::Write;
use tracing::debug;

/// Line printed for `--version`
#[must_use]
#[inline]
pub fn version_line() -> String {
    format!("{NAME} version {VERSION}")
}

/// Usage block printed for `--help`, one trailing newline per line
#[must_use]
#[inline]
pub fn help_text() -> String {
    format!(
        "{NAME} - CLI tool\n\
         Version: {VERSION}\n\
         \n\
         Usage: {NAME} [options]\n\
         \n\
         Options:\n  \
         --version, -v    Show version\n  \
         --help, -h       Show this help message\n"
    )
}

/// Run one invocation against the given system and return its exit code
///
/// Every argument list succeeds with exit code 0; unrecognized flags run the
/// core function.
///
/// # Errors
///
/// Returns an error if:
/// - Writing to stdout fails
#[inline]
pub fn dispatch(system: &dyn System) -> Result<i32> {
    let args = system.args();
    let action = Action::from_args(&args);
    debug!(?action, argc = args.len(), "Dispatching");

    let output = match action {
        Action::ShowVersion => format!("{}\n", version_line()),
        Action::ShowHelp => help_text(),
        Action::Run => format!("{}\n", run()),
    };

    let mut stdout = system.stdout();
    stdout
        .write_all(output.as_bytes())
        .and_then(|()| stdout.flush())
        .map_err(|e| StarterError::output(format!("Failed to write to stdout: {e}")))?;

    Ok(0)
}
