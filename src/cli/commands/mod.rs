//! CLI command implementations.
//!
//! Commands implement the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//! [`CommandDispatcher`] builds the command from parsed arguments.

pub mod diagnose;
pub mod dispatcher;

pub use diagnose::DiagnoseCommand;
pub use dispatcher::{Command, CommandDispatcher, CommandResult};
