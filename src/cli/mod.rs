//! Command-line interface for the demonstration harness.

pub mod commands;

pub use commands::CliError;
