//! Status vocabulary for report lines.
//!
//! `StatusKind` is the single set of markers used by every check, so a
//! passing permission flag and a present artifact look the same.

use super::theme::DiagTheme;

/// Canonical status kinds used across the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKind {
    /// Check passed, flag is set, or item exists.
    Success,
    /// Check failed, flag is unset, or item is missing.
    Failed,
    /// Something could not be determined; the run continues.
    Warning,
}

impl StatusKind {
    /// Map a boolean check outcome to a status.
    pub fn from_bool(ok: bool) -> Self {
        if ok {
            Self::Success
        } else {
            Self::Failed
        }
    }

    /// Unicode icon.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Failed => "✗",
            Self::Warning => "⚠",
        }
    }

    /// Styled icon string using the given theme.
    pub fn styled(self, theme: &DiagTheme) -> String {
        let icon = self.icon();
        match self {
            Self::Success => theme.success.apply_to(icon).to_string(),
            Self::Failed => theme.error.apply_to(icon).to_string(),
            Self::Warning => theme.warning.apply_to(icon).to_string(),
        }
    }

    /// Format a status line: styled icon + message.
    pub fn format(self, theme: &DiagTheme, msg: &str) -> String {
        format!("{} {}", self.styled(theme), msg)
    }
}
