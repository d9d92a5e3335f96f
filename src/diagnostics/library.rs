//! Numeric library availability.

use serde::Serialize;

use crate::error::DiagError;
use crate::python::PythonRuntime;

/// Module imported by default.
pub const DEFAULT_NUMERIC_MODULE: &str = "numpy";

/// Name shown for the default module.
pub const DEFAULT_NUMERIC_LABEL: &str = "NumPy";

/// Result of trying to import a library. Never fatal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LibraryStatus {
    /// Imported; `version` is the module's own `__version__`.
    Available { module: String, version: String },
    /// The interpreter ran but the import raised.
    ImportFailed { module: String, reason: String },
    /// The interpreter could not be run at all.
    InterpreterUnavailable { module: String, reason: String },
}

impl LibraryStatus {
    /// Whether the library could be imported.
    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available { .. })
    }

    /// The reported version, if available.
    pub fn version(&self) -> Option<&str> {
        match self {
            Self::Available { version, .. } => Some(version),
            _ => None,
        }
    }
}

/// Try to import `module` through the runtime.
pub fn probe_library(runtime: &dyn PythonRuntime, module: &str) -> LibraryStatus {
    match runtime.module_version(module) {
        Ok(version) => LibraryStatus::Available {
            module: module.to_string(),
            version,
        },
        Err(DiagError::ImportFailed { message, .. }) => {
            tracing::debug!("Import of {} failed: {}", module, message);
            LibraryStatus::ImportFailed {
                module: module.to_string(),
                reason: message,
            }
        }
        Err(e) => {
            tracing::debug!("Could not query {}: {}", module, e);
            LibraryStatus::InterpreterUnavailable {
                module: module.to_string(),
                reason: e.to_string(),
            }
        }
    }
}
