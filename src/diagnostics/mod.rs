//! The working directory diagnostic.
//!
//! A run is five independent checks in a fixed order:
//!
//! 1. [`working_dir`] - resolve the current directory (fatal on failure)
//! 2. [`permissions`] - read/write/execute access to `.` (fatal if the probe fails)
//! 3. [`artifacts`] - existence of the expected project files
//! 4. [`search_path`] - leading entries of the interpreter's `sys.path`
//! 5. [`library`] - whether the numeric library imports, and its version
//!
//! [`Diagnostician`] runs them and collects a [`DiagnosticReport`];
//! [`render`] turns that into terminal lines or JSON.
//!
//! # Example
//!
//! ```
//! use workdir_diag::diagnostics::{Diagnostician, DiagnosticOptions};
//! use workdir_diag::python::FakeRuntime;
//!
//! let runtime = FakeRuntime::new().with_module("numpy", "1.2.3");
//! let options = DiagnosticOptions::default();
//! let report = Diagnostician::new(&runtime, &options).run();
//!
//! assert!(report.succeeded());
//! assert_eq!(report.numeric_library.unwrap().version(), Some("1.2.3"));
//! ```

pub mod artifacts;
pub mod library;
pub mod permissions;
pub mod render;
pub mod report;
pub mod runner;
pub mod search_path;
pub mod working_dir;

use std::path::PathBuf;

pub use artifacts::{probe_artifacts, ArtifactStatus, DEFAULT_ARTIFACTS};
pub use library::{probe_library, LibraryStatus};
pub use permissions::{probe_permissions, DirPermissions};
pub use render::{render_human, render_json};
pub use report::{DiagnosticReport, FatalCheck, FatalFailure};
pub use runner::Diagnostician;
pub use search_path::{list_search_path, SearchPathEntry, SearchPathListing, SearchPathOutcome};
pub use working_dir::resolve_working_dir;

/// What a run checks. The defaults are the fixed project checklist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticOptions {
    /// Change into this directory before the first step.
    pub directory: Option<PathBuf>,
    /// Relative paths probed for existence, in display order.
    pub expected_artifacts: Vec<String>,
    /// How many search path entries to list.
    pub search_path_limit: usize,
    /// Module imported by the library step.
    pub numeric_module: String,
    /// Display name for that module.
    pub numeric_label: String,
}

impl Default for DiagnosticOptions {
    fn default() -> Self {
        Self {
            directory: None,
            expected_artifacts: DEFAULT_ARTIFACTS.iter().map(|s| s.to_string()).collect(),
            search_path_limit: search_path::DEFAULT_SEARCH_PATH_LIMIT,
            numeric_module: library::DEFAULT_NUMERIC_MODULE.to_string(),
            numeric_label: library::DEFAULT_NUMERIC_LABEL.to_string(),
        }
    }
}
