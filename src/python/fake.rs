//! In-memory runtime for tests.
//!
//! # Example
//!
//! ```
//! use workdir_diag::python::{FakeRuntime, PythonRuntime};
//!
//! let runtime = FakeRuntime::new().with_module("numpy", "1.2.3");
//! assert_eq!(runtime.module_version("numpy").unwrap(), "1.2.3");
//! assert!(runtime.module_version("scipy").is_err());
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::{DiagError, Result};

use super::PythonRuntime;

/// A `PythonRuntime` with canned answers.
#[derive(Debug, Clone)]
pub struct FakeRuntime {
    interpreter: PathBuf,
    search_path: Vec<String>,
    modules: HashMap<String, String>,
    unavailable: bool,
}

impl Default for FakeRuntime {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeRuntime {
    /// A runtime with a typical four-entry search path and no modules.
    pub fn new() -> Self {
        Self {
            interpreter: PathBuf::from("/fake/bin/python3"),
            search_path: vec![
                String::new(),
                "/fake/lib/python312.zip".to_string(),
                "/fake/lib/python3.12".to_string(),
                "/fake/lib/python3.12/site-packages".to_string(),
            ],
            modules: HashMap::new(),
            unavailable: false,
        }
    }

    /// A runtime whose interpreter cannot be started.
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::new()
        }
    }

    /// Replace the search path.
    pub fn with_search_path(mut self, paths: &[&str]) -> Self {
        self.search_path = paths.iter().map(|p| p.to_string()).collect();
        self
    }

    /// Make `module` importable at `version`.
    pub fn with_module(mut self, module: &str, version: &str) -> Self {
        self.modules.insert(module.to_string(), version.to_string());
        self
    }

    fn launch_error(&self) -> DiagError {
        DiagError::InterpreterUnavailable {
            interpreter: self.interpreter.clone(),
            message: "No such file or directory (os error 2)".to_string(),
        }
    }
}

impl PythonRuntime for FakeRuntime {
    fn interpreter(&self) -> &Path {
        &self.interpreter
    }

    fn search_path(&self) -> Result<Vec<String>> {
        if self.unavailable {
            return Err(self.launch_error());
        }
        Ok(self.search_path.clone())
    }

    fn module_version(&self, module: &str) -> Result<String> {
        if self.unavailable {
            return Err(self.launch_error());
        }
        self.modules
            .get(module)
            .cloned()
            .ok_or_else(|| DiagError::ImportFailed {
                module: module.to_string(),
                message: format!("No module named '{}'", module),
            })
    }
}
