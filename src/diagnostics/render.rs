//! Human and JSON rendering of a [`DiagnosticReport`].

use serde::Serialize;

use crate::error::Result;
use crate::ui::{hints, StatusKind, UserInterface};

use super::library::LibraryStatus;
use super::report::{DiagnosticReport, FatalCheck};
use super::search_path::SearchPathOutcome;
use super::DiagnosticOptions;

/// Banner printed before the first check.
pub const HEADER_TITLE: &str = "Working Directory Diagnostic";

/// Banner printed after the last check.
pub const FOOTER_TITLE: &str = "Diagnostic Complete";

/// Print the report section by section.
///
/// Stops after the failure line when a fatal step failed; the footer is
/// only printed for a complete run.
pub fn render_human(
    ui: &mut dyn UserInterface,
    report: &DiagnosticReport,
    options: &DiagnosticOptions,
) {
    ui.show_header(HEADER_TITLE);

    if let Some(failure) = report.failure_of(FatalCheck::WorkingDirectory) {
        ui.status(
            StatusKind::Failed,
            &format!("Cannot get current working directory: {}", failure.message),
        );
        ui.hint(hints::after_fatal_failure());
        return;
    }
    if let Some(cwd) = &report.working_dir {
        ui.status(
            StatusKind::Success,
            &format!("Current working directory: {}", cwd.display()),
        );
    }

    if let Some(failure) = report.failure_of(FatalCheck::Permissions) {
        ui.status(
            StatusKind::Failed,
            &format!("Cannot check directory permissions: {}", failure.message),
        );
        ui.hint(hints::after_fatal_failure());
        return;
    }
    if let Some(perms) = &report.permissions {
        ui.message("Directory permissions:");
        for (label, ok) in perms.flags() {
            ui.status_item(StatusKind::from_bool(ok), label);
        }
    }

    ui.message("");
    ui.message("Required project files:");
    for artifact in &report.artifacts {
        ui.status_item(StatusKind::from_bool(artifact.exists), &artifact.path);
        if !artifact.exists {
            if let Some(hint) = hints::missing_artifact(&artifact.path) {
                ui.hint(hint);
            }
        }
    }

    let interpreter = report
        .interpreter
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_default();

    if let Some(outcome) = &report.search_path {
        ui.message("");
        render_search_path(ui, outcome, &interpreter, options);
    }

    if let Some(library) = &report.numeric_library {
        ui.message("");
        render_library(ui, library, &interpreter, &options.numeric_label);
    }

    ui.message("");
    ui.show_header(FOOTER_TITLE);
}

fn render_search_path(
    ui: &mut dyn UserInterface,
    outcome: &SearchPathOutcome,
    interpreter: &str,
    options: &DiagnosticOptions,
) {
    ui.message(&format!(
        "Python sys.path (first {}) via {}:",
        options.search_path_limit, interpreter
    ));

    match outcome {
        SearchPathOutcome::Listed(listing) => {
            for entry in &listing.entries {
                ui.message(&format!("  {}: {}", entry.index, entry.path));
            }
            if ui.output_mode().shows_details() {
                ui.message(&format!("  ({} entries total)", listing.total));
            }
        }
        SearchPathOutcome::Unavailable { reason } => {
            ui.status_item(
                StatusKind::Warning,
                &format!("Cannot read search path: {}", reason),
            );
            ui.hint(hints::interpreter_unavailable());
        }
    }
}

fn render_library(
    ui: &mut dyn UserInterface,
    status: &LibraryStatus,
    interpreter: &str,
    label: &str,
) {
    match status {
        LibraryStatus::Available { version, .. } => {
            ui.status(
                StatusKind::Success,
                &format!("{} available: version {}", label, version),
            );
        }
        LibraryStatus::ImportFailed { module, reason } => {
            ui.status(
                StatusKind::Failed,
                &format!("{} import failed: {}", label, reason),
            );
            ui.hint(&hints::missing_module(interpreter, module));
        }
        LibraryStatus::InterpreterUnavailable { reason, .. } => {
            ui.status(
                StatusKind::Failed,
                &format!("{} import failed: {}", label, reason),
            );
            ui.hint(hints::interpreter_unavailable());
        }
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    success: bool,
    #[serde(flatten)]
    report: &'a DiagnosticReport,
}

/// Serialize the report as pretty JSON with a top-level `success` field.
pub fn render_json(report: &DiagnosticReport) -> Result<String> {
    let json = serde_json::to_string_pretty(&JsonReport {
        success: report.succeeded(),
        report,
    })?;
    Ok(json)
}
