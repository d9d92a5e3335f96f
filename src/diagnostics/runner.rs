//! Runs the checks in order and collects a report.

use std::path::Path;

use crate::python::PythonRuntime;

use super::artifacts::probe_artifacts;
use super::library::probe_library;
use super::permissions::probe_permissions;
use super::report::{DiagnosticReport, FatalCheck};
use super::search_path::{list_search_path, SearchPathOutcome};
use super::working_dir::resolve_working_dir;
use super::DiagnosticOptions;

/// Runs the five checks against the current directory.
///
/// Each step is contained: only the working directory and permission steps
/// can stop the run. Nothing is printed here; see [`super::render`].
pub struct Diagnostician<'a> {
    runtime: &'a dyn PythonRuntime,
    options: &'a DiagnosticOptions,
}

impl<'a> Diagnostician<'a> {
    /// Create a runner that queries `runtime` for the interpreter steps.
    pub fn new(runtime: &'a dyn PythonRuntime, options: &'a DiagnosticOptions) -> Self {
        Self { runtime, options }
    }

    /// Execute all steps in order.
    pub fn run(&self) -> DiagnosticReport {
        let mut report = DiagnosticReport::default();

        match resolve_working_dir(self.options.directory.as_deref()) {
            Ok(cwd) => report.working_dir = Some(cwd),
            Err(e) => {
                tracing::debug!("Working directory step failed: {:?}", e);
                report.fail(FatalCheck::WorkingDirectory, e.to_string());
                return report;
            }
        }

        // Re-resolved from ".", not from the path above.
        let here = Path::new(".");
        match probe_permissions(here) {
            Ok(perms) => report.permissions = Some(perms),
            Err(e) => {
                tracing::debug!("Permission step failed: {:?}", e);
                report.fail(FatalCheck::Permissions, e.to_string());
                return report;
            }
        }

        report.artifacts = probe_artifacts(here, &self.options.expected_artifacts);

        report.interpreter = Some(self.runtime.interpreter().to_path_buf());
        report.search_path = Some(
            match list_search_path(self.runtime, self.options.search_path_limit) {
                Ok(listing) => SearchPathOutcome::Listed(listing),
                Err(e) => {
                    tracing::debug!("Could not read interpreter search path: {}", e);
                    SearchPathOutcome::Unavailable {
                        reason: e.to_string(),
                    }
                }
            },
        );

        report.numeric_library = Some(probe_library(self.runtime, &self.options.numeric_module));

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::LibraryStatus;
    use crate::python::FakeRuntime;

    #[test]
    fn run_in_current_directory_succeeds() {
        let runtime = FakeRuntime::new().with_module("numpy", "1.2.3");
        let options = DiagnosticOptions::default();
        let report = Diagnostician::new(&runtime, &options).run();

        assert!(report.succeeded());
        assert_eq!(report.working_dir, Some(std::env::current_dir().unwrap()));
        assert!(report.permissions.is_some());
        assert_eq!(report.numeric_library.unwrap().version(), Some("1.2.3"));
    }

    #[test]
    fn artifacts_match_filesystem() {
        let runtime = FakeRuntime::new();
        let options = DiagnosticOptions::default();
        let report = Diagnostician::new(&runtime, &options).run();

        assert_eq!(report.artifacts.len(), options.expected_artifacts.len());
        for status in &report.artifacts {
            assert_eq!(status.exists, Path::new(&status.path).exists());
        }
    }

    #[test]
    fn missing_library_keeps_success() {
        let runtime = FakeRuntime::new();
        let options = DiagnosticOptions::default();
        let report = Diagnostician::new(&runtime, &options).run();

        assert!(matches!(
            report.numeric_library,
            Some(LibraryStatus::ImportFailed { .. })
        ));
        assert!(report.succeeded());
    }

    #[test]
    fn unavailable_interpreter_keeps_success() {
        let runtime = FakeRuntime::unavailable();
        let options = DiagnosticOptions::default();
        let report = Diagnostician::new(&runtime, &options).run();

        assert!(matches!(
            report.search_path,
            Some(SearchPathOutcome::Unavailable { .. })
        ));
        assert!(matches!(
            report.numeric_library,
            Some(LibraryStatus::InterpreterUnavailable { .. })
        ));
        assert!(report.succeeded());
    }

    #[test]
    fn search_path_is_limited() {
        let runtime = FakeRuntime::new().with_search_path(&["a", "b", "c", "d", "e"]);
        let options = DiagnosticOptions::default();
        let report = Diagnostician::new(&runtime, &options).run();

        match report.search_path {
            Some(SearchPathOutcome::Listed(listing)) => {
                assert_eq!(listing.entries.len(), 3);
                assert_eq!(listing.total, 5);
            }
            other => panic!("expected listing, got {:?}", other),
        }
    }

    #[test]
    fn bad_directory_stops_the_run() {
        let runtime = FakeRuntime::new().with_module("numpy", "1.2.3");
        let options = DiagnosticOptions {
            directory: Some("/nonexistent/workdir-diag".into()),
            ..Default::default()
        };
        let report = Diagnostician::new(&runtime, &options).run();

        assert!(!report.succeeded());
        assert!(report.failure_of(FatalCheck::WorkingDirectory).is_some());
        assert!(report.permissions.is_none());
        assert!(report.artifacts.is_empty());
        assert!(report.search_path.is_none());
        assert!(report.numeric_library.is_none());
    }
}
