//! Mock system implementation for testing

use tracing::warn;

use super::System;
use std::io::{self, Write};
use std::sync::{Arc, RwLock};

/// In-memory implementation of System trait for testing
///
/// `MockSystem` carries a fixed argument list and captures everything
/// written to stdout.
///
/// # Example
/// ```
/// use claude_code_starter_kit::system::{mock::MockSystem, System};
/// use std::io::Write;
///
/// let system = MockSystem::new().with_args(["tool", "--help"]).unwrap();
/// assert_eq!(system.args(), vec!["tool", "--help"]);
///
/// writeln!(system.stdout(), "hello").unwrap();
/// assert_eq!(system.stdout_contents().unwrap(), "hello\n");
/// ```
#[derive(Clone)]
pub struct MockSystem {
    state: Arc<RwLock<MockSystemState>>,
}

struct MockSystemState {
    args: Vec<String>,
    stdout: Vec<u8>,
    stdout_fails: bool,
}

impl MockSystem {
    /// Create a new `MockSystem` whose argument list holds only a program name
    #[must_use]
    #[inline]
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(MockSystemState {
                args: vec![crate::NAME.to_owned()],
                stdout: Vec::new(),
                stdout_fails: false,
            })),
        }
    }

    /// Replace the argument list (builder pattern)
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The state lock is poisoned
    #[inline]
    pub fn with_args<I, S>(self, args: I) -> io::Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut state = self
            .state
            .write()
            .map_err(|e| io::Error::other(e.to_string()))?;
        state.args = args.into_iter().map(Into::into).collect();
        drop(state);
        Ok(self)
    }

    /// Make every write to stdout fail with a broken pipe (builder pattern)
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The state lock is poisoned
    #[inline]
    pub fn with_failing_stdout(self) -> io::Result<Self> {
        let mut state = self
            .state
            .write()
            .map_err(|e| io::Error::other(e.to_string()))?;
        state.stdout_fails = true;
        drop(state);
        Ok(self)
    }

    /// Everything written to stdout so far
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The state lock is poisoned
    /// - The captured output is not valid UTF-8
    #[inline]
    pub fn stdout_contents(&self) -> io::Result<String> {
        let state = self
            .state
            .read()
            .map_err(|e| io::Error::other(e.to_string()))?;
        String::from_utf8(state.stdout.clone())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}

impl Default for MockSystem {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl System for MockSystem {
    #[inline]
    fn args(&self) -> Vec<String> {
        // A poisoned lock still holds the configured arguments
        let state = self.state.read().unwrap_or_else(|poisoned| {
            warn!("Mock system state lock is poisoned, reading arguments anyway");
            poisoned.into_inner()
        });
        state.args.clone()
    }

    #[inline]
    fn stdout(&self) -> Box<dyn Write + '_> {
        Box::new(MockStdout {
            state: Arc::clone(&self.state),
        })
    }
}

/// Writer that appends to the shared mock buffer
struct MockStdout {
    state: Arc<RwLock<MockSystemState>>,
}

impl Write for MockStdout {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut state = self
            .state
            .write()
            .map_err(|e| io::Error::other(e.to_string()))?;
        if state.stdout_fails {
            return Err(io::Error::new(
                io::ErrorKind::BrokenPipe,
                "stdout is closed",
            ));
        }
        state.stdout.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "This is a test module")]
mod tests {
    use super::*;

    #[test]
    fn test_default_args_hold_program_name() {
        let system = MockSystem::new();
        assert_eq!(system.args(), vec![crate::NAME.to_owned()]);
    }

    #[test]
    fn test_args_survive_poisoned_lock() {
        let system = MockSystem::new().with_args(["tool", "--version"]).unwrap();
        let clone = system.clone();
        let result = std::thread::spawn(move || {
            let _guard = clone.state.write().unwrap();
            panic!("poison the state lock");
        })
        .join();

        assert!(result.is_err());
        assert!(system.state.is_poisoned());
        assert_eq!(system.args(), vec!["tool", "--version"]);
    }

    #[test]
    fn test_clones_share_stdout() {
        let system = MockSystem::new();
        let clone = system.clone();
        write!(clone.stdout(), "abc").unwrap();
        write!(system.stdout(), "def").unwrap();
        assert_eq!(system.stdout_contents().unwrap(), "abcdef");
    }

    #[test]
    fn test_failing_stdout() {
        let system = MockSystem::new().with_failing_stdout().unwrap();
        let err = writeln!(system.stdout(), "lost").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        assert!(system.stdout_contents().unwrap().is_empty());
    }
}
