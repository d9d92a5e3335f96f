//! Diagnose command implementation.
//!
//! Locates an interpreter, runs every check, and prints the report. The
//! exit code is 1 only when the working directory or permission step
//! failed.

use crate::cli::args::DiagnoseArgs;
use crate::diagnostics::{
    render_human, render_json, DiagnosticOptions, DiagnosticReport, Diagnostician,
};
use crate::error::Result;
use crate::python::{locate_interpreter, ProcessRuntime, PythonRuntime};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The diagnose command implementation.
pub struct DiagnoseCommand {
    args: DiagnoseArgs,
    options: DiagnosticOptions,
}

impl DiagnoseCommand {
    /// Create a new diagnose command with the standard checklist.
    pub fn new(args: DiagnoseArgs) -> Self {
        let options = DiagnosticOptions {
            directory: args.directory.clone(),
            ..Default::default()
        };
        Self { args, options }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &DiagnoseArgs {
        &self.args
    }

    /// Get the run options.
    pub fn options(&self) -> &DiagnosticOptions {
        &self.options
    }

    /// Run against a specific runtime.
    pub fn execute_with(
        &self,
        runtime: &dyn PythonRuntime,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        let report = Diagnostician::new(runtime, &self.options).run();
        self.present(&report, ui)
    }

    /// Print a finished report and map it to the exit status.
    pub fn present(
        &self,
        report: &DiagnosticReport,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        if self.args.json {
            ui.message(&render_json(report)?);
        } else {
            render_human(ui, report, &self.options);
        }

        if report.succeeded() {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}

impl Command for DiagnoseCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let located = locate_interpreter(self.args.python.as_deref());
        tracing::debug!(
            "Using interpreter {} ({:?})",
            located.path.display(),
            located.source
        );

        let runtime = ProcessRuntime::new(located.path);
        self.execute_with(&runtime, ui)
    }
}
