//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures every line
//! for later assertion. It also keeps the full report as rendered lines
//! (with plain icons) so tests can check ordering.
//!
//! # Example
//!
//! ```
//! use workdir_diag::ui::{MockUI, StatusKind, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.status_item(StatusKind::Failed, "build/");
//!
//! assert!(ui.has_item(StatusKind::Failed, "build/"));
//! assert_eq!(ui.lines(), ["  ✗ build/"]);
//! ```

use super::{OutputMode, StatusKind, UserInterface};

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    lines: Vec<String>,
    messages: Vec<String>,
    statuses: Vec<(StatusKind, String)>,
    items: Vec<(StatusKind, String)>,
    hints: Vec<String>,
    headers: Vec<String>,
    errors: Vec<String>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Every stdout line in order, as the plain terminal would print it.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Get all captured plain messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured top-level status lines.
    pub fn statuses(&self) -> &[(StatusKind, String)] {
        &self.statuses
    }

    /// Get all captured list items.
    pub fn items(&self) -> &[(StatusKind, String)] {
        &self.items
    }

    /// Get all captured hints (including ones the mode would hide).
    pub fn hints(&self) -> &[String] {
        &self.hints
    }

    /// Get all captured headers.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Get all captured stderr errors.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Check if a plain message containing `msg` was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    /// Check if a status line of `kind` containing `msg` was shown.
    pub fn has_status(&self, kind: StatusKind, msg: &str) -> bool {
        self.statuses
            .iter()
            .any(|(k, m)| *k == kind && m.contains(msg))
    }

    /// Check if a list item of `kind` containing `msg` was shown.
    pub fn has_item(&self, kind: StatusKind, msg: &str) -> bool {
        self.items.iter().any(|(k, m)| *k == kind && m.contains(msg))
    }

    /// Check if a hint containing `msg` was shown.
    pub fn has_hint(&self, msg: &str) -> bool {
        self.hints.iter().any(|h| h.contains(msg))
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.lines.push(msg.to_string());
        self.messages.push(msg.to_string());
    }

    fn status(&mut self, kind: StatusKind, msg: &str) {
        self.lines.push(format!("{} {}", kind.icon(), msg));
        self.statuses.push((kind, msg.to_string()));
    }

    fn status_item(&mut self, kind: StatusKind, msg: &str) {
        self.lines.push(format!("  {} {}", kind.icon(), msg));
        self.items.push((kind, msg.to_string()));
    }

    fn hint(&mut self, msg: &str) {
        if self.mode.shows_hints() {
            self.lines.push(format!("    → {}", msg));
        }
        self.hints.push(msg.to_string());
    }

    fn show_header(&mut self, title: &str) {
        self.lines.push(format!("=== {} ===", title));
        self.headers.push(title.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }
}
