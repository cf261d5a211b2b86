//! Command-line interface module
//!
//! Handles flag matching and dispatch

pub mod args;
pub mod commands;

pub use args::*;
pub use commands::*;
