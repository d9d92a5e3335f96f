//! Terminal output for diagnostic reports.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for writing to stdout
//! - [`MockUI`] for capturing output in tests
//! - Shared status icons, theme, and hint text
//!
//! # Example
//!
//! ```
//! use workdir_diag::ui::{MockUI, StatusKind, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.show_header("Working Directory Diagnostic");
//! ui.status(StatusKind::Success, "Current working directory: /tmp");
//! assert!(ui.has_status(StatusKind::Success, "/tmp"));
//! ```

pub mod hints;
pub mod icons;
pub mod mock;
pub mod output;
pub mod terminal;
pub mod theme;

pub use icons::StatusKind;
pub use mock::MockUI;
pub use output::OutputMode;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_color_logs, should_use_colors, DiagTheme};

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests. Everything except
/// [`UserInterface::error`] is part of the report and goes to stdout.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a plain line.
    fn message(&mut self, msg: &str);

    /// Display a top-level status line: icon + message.
    fn status(&mut self, kind: StatusKind, msg: &str);

    /// Display an indented list item with a status icon.
    fn status_item(&mut self, kind: StatusKind, msg: &str);

    /// Show a contextual hint under the previous line.
    fn hint(&mut self, msg: &str);

    /// Show a banner line.
    fn show_header(&mut self, title: &str);

    /// Report an error that is not part of the report (stderr).
    fn error(&mut self, msg: &str);
}
