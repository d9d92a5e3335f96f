//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! Every flag is optional: with none, the run is the standard checklist
//! against the current directory.

use clap::Parser;
use std::path::PathBuf;

/// Diagnose the working directory, project layout, and Python environment.
#[derive(Debug, Parser)]
#[command(name = "workdir-diag")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Change into DIR before running (like `git -C`)
    #[arg(short = 'C', long, value_name = "DIR")]
    pub directory: Option<PathBuf>,

    /// Python interpreter to query (default: active venv, then PATH)
    #[arg(long, value_name = "PATH", env = "WORKDIR_DIAG_PYTHON")]
    pub python: Option<PathBuf>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Show extra detail
    #[arg(short, long)]
    pub verbose: bool,

    /// Hide fix hints
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Arguments for the diagnose command.
    pub fn diagnose_args(&self) -> DiagnoseArgs {
        DiagnoseArgs {
            directory: self.directory.clone(),
            python: self.python.clone(),
            json: self.json,
        }
    }
}

/// Arguments for the diagnose command.
#[derive(Debug, Clone, Default)]
pub struct DiagnoseArgs {
    /// Directory to change into first.
    pub directory: Option<PathBuf>,

    /// Explicit interpreter.
    pub python: Option<PathBuf>,

    /// Output as JSON
    pub json: bool,
}
