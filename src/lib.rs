//! workdir-diag - Working directory and Python environment diagnostic.
//!
//! Prints where the process is running, whether that directory is usable,
//! which expected project files are present, where the Python interpreter
//! looks for modules, and whether NumPy imports.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`diagnostics`] - The checks, the run report, and its rendering
//! - [`error`] - Error types and result aliases
//! - [`python`] - Interpreter discovery and queries
//! - [`ui`] - Terminal output and status icons
//!
//! # Example
//!
//! ```
//! use workdir_diag::diagnostics::{render_human, DiagnosticOptions, Diagnostician};
//! use workdir_diag::python::FakeRuntime;
//! use workdir_diag::ui::MockUI;
//!
//! let runtime = FakeRuntime::new().with_module("numpy", "1.2.3");
//! let options = DiagnosticOptions::default();
//! let report = Diagnostician::new(&runtime, &options).run();
//!
//! let mut ui = MockUI::new();
//! render_human(&mut ui, &report, &options);
//! assert!(ui.lines().iter().any(|l| l.contains("version 1.2.3")));
//! ```

pub mod cli;
pub mod diagnostics;
pub mod error;
pub mod python;
pub mod ui;

pub use error::{DiagError, Result};
