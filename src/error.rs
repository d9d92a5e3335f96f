//! Error types for diagnostic runs.
//!
//! This module defines [`DiagError`], the error type returned by every
//! individual check, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Each check returns its own `Result`; the runner decides whether a
//!   failure stops the run or is only reported
//! - Use `anyhow::Error` (via `DiagError::Other`) for unexpected errors
//! - Messages are shown to the user verbatim, so keep them short

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for diagnostic operations.
#[derive(Debug, Error)]
pub enum DiagError {
    /// The process's current directory could not be resolved.
    #[error("{source}")]
    WorkingDirectory {
        #[source]
        source: std::io::Error,
    },

    /// Changing into the requested directory failed.
    #[error("cannot change into {path}: {source}")]
    ChangeDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The permission probe itself failed (not a denial).
    #[error("{path}: {source}")]
    PermissionProbe {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The Python interpreter could not be started.
    #[error("cannot run {interpreter}: {message}")]
    InterpreterUnavailable {
        interpreter: PathBuf,
        message: String,
    },

    /// The interpreter ran but its answer could not be understood.
    #[error("unexpected output from {interpreter}: {message}")]
    InterpreterOutput {
        interpreter: PathBuf,
        message: String,
    },

    /// Importing a module inside the interpreter failed.
    #[error("{message}")]
    ImportFailed { module: String, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for diagnostic operations.
pub type Result<T> = std::result::Result<T, DiagError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn working_directory_displays_source() {
        let err = DiagError::WorkingDirectory {
            source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        };
        assert_eq!(err.to_string(), "No such file or directory");
    }

    #[test]
    fn change_directory_displays_path() {
        let err = DiagError::ChangeDirectory {
            path: PathBuf::from("/nowhere"),
            source: io::Error::new(io::ErrorKind::NotFound, "missing"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/nowhere"));
        assert!(msg.contains("missing"));
    }

    #[test]
    fn permission_probe_displays_path_and_source() {
        let err = DiagError::PermissionProbe {
            path: PathBuf::from("."),
            source: io::Error::new(io::ErrorKind::Other, "I/O error"),
        };
        assert_eq!(err.to_string(), ".: I/O error");
    }

    #[test]
    fn interpreter_unavailable_displays_interpreter() {
        let err = DiagError::InterpreterUnavailable {
            interpreter: PathBuf::from("/usr/bin/python3"),
            message: "not found".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/usr/bin/python3"));
        assert!(msg.contains("not found"));
    }

    #[test]
    fn import_failed_displays_only_message() {
        let err = DiagError::ImportFailed {
            module: "numpy".into(),
            message: "No module named 'numpy'".into(),
        };
        assert_eq!(err.to_string(), "No module named 'numpy'");
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file missing");
        let err: DiagError = io_err.into();
        assert!(matches!(err, DiagError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(anyhow::anyhow!("boom").into())
        }
        assert!(returns_error().is_err());
    }
}
