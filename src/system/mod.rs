//! System abstraction for process arguments and console output
//!
//! This module provides a unified trait for all external system interactions,
//! allowing the dispatcher to be tested with a mock implementation.

use std::io::Write;

pub mod mock;
pub mod real;

pub use mock::MockSystem;
pub use real::RealSystem;

/// Unified trait for system operations
///
/// # Implementations
/// - `RealSystem`: Production implementation using `std::env` and `std::io`
/// - `MockSystem`: Test implementation using in-memory storage
pub trait System: Send + Sync {
    /// Process arguments, program name first
    fn args(&self) -> Vec<String>;

    /// Handle to standard output
    fn stdout(&self) -> Box<dyn Write + '_>;
}
