//! Command-line interface.
//!
//! This module provides the CLI argument parsing using clap's derive macros
//! and the command implementation.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{Cli, DiagnoseArgs};
pub use commands::{Command, CommandDispatcher, CommandResult, DiagnoseCommand};
