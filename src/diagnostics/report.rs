//! Collected outcome of one diagnostic run.

use serde::{Serialize, Serializer};
use std::path::PathBuf;

use super::artifacts::ArtifactStatus;
use super::library::LibraryStatus;
use super::permissions::DirPermissions;
use super::search_path::SearchPathOutcome;

/// The steps whose failure stops the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FatalCheck {
    WorkingDirectory,
    Permissions,
}

/// Why the run stopped early.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FatalFailure {
    pub check: FatalCheck,
    pub message: String,
}

/// Everything one run found.
///
/// Steps after a fatal failure never ran: their fields stay `None` (or
/// empty, for `artifacts`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DiagnosticReport {
    #[serde(serialize_with = "serialize_lossy_path")]
    pub working_dir: Option<PathBuf>,
    pub permissions: Option<DirPermissions>,
    pub artifacts: Vec<ArtifactStatus>,
    #[serde(serialize_with = "serialize_lossy_path")]
    pub interpreter: Option<PathBuf>,
    pub search_path: Option<SearchPathOutcome>,
    pub numeric_library: Option<LibraryStatus>,
    pub failure: Option<FatalFailure>,
}

impl DiagnosticReport {
    /// True unless the working directory or permission step failed.
    ///
    /// Search path and library outcomes never affect this.
    pub fn succeeded(&self) -> bool {
        self.failure.is_none()
    }

    /// Record a fatal failure.
    pub fn fail(&mut self, check: FatalCheck, message: impl Into<String>) {
        self.failure = Some(FatalFailure {
            check,
            message: message.into(),
        });
    }

    /// The fatal failure for `check`, if that is where the run stopped.
    pub fn failure_of(&self, check: FatalCheck) -> Option<&FatalFailure> {
        self.failure.as_ref().filter(|f| f.check == check)
    }
}

/// Paths that are not valid UTF-8 serialize with U+FFFD replacements.
fn serialize_lossy_path<S: Serializer>(
    path: &Option<PathBuf>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    match path {
        Some(p) => serializer.serialize_some(&p.to_string_lossy()),
        None => serializer.serialize_none(),
    }
}
