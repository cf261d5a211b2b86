//! Error handling module
//!
//! Defines the error type surfaced by the binary and its exit code

pub mod types;

pub use types::*;
