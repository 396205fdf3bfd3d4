//! Command-line interface
//!
//! CLI commands and argument parsing for the wallet tool.

pub mod commands;

pub use commands::{Command, Opt};
