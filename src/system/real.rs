//! Real system implementation using `std::env` and `std::io`

use super::System;
use std::io::{self, Write};

/// Production implementation of System trait
///
/// Delegates directly to the standard library.
#[derive(Debug, Clone, Copy)]
pub struct RealSystem;

impl RealSystem {
    /// Create a new `RealSystem` instance
    #[must_use]
    pub const fn new() -> Self {
        return Self;
    }
}

impl Default for RealSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl System for RealSystem {
    // Non UTF-8 arguments can never match a flag, so lossy conversion is enough
    fn args(&self) -> Vec<String> {
        std::env::args_os()
            .map(|arg| arg.to_string_lossy().into_owned())
            .collect()
    }

    fn stdout(&self) -> Box<dyn Write + '_> {
        Box::new(io::stdout().lock())
    }
}
