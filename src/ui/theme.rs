//! Visual theme and styling.

use console::Style;

/// Colors used by the terminal report.
#[derive(Debug, Clone)]
pub struct DiagTheme {
    /// Style for passing checks (green).
    pub success: Style,
    /// Style for undetermined checks (orange).
    pub warning: Style,
    /// Style for failing checks (red bold).
    pub error: Style,
    /// Style for banner lines (magenta bold).
    pub header: Style,
    /// Style for contextual hints (magenta dim).
    pub hint: Style,
}

impl Default for DiagTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagTheme {
    /// Create the default colored theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            header: Style::new().bold().magenta(),
            hint: Style::new().magenta().dim(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            header: Style::new(),
            hint: Style::new(),
        }
    }

    /// Format a banner line.
    pub fn format_header(&self, title: &str) -> String {
        format!("{}", self.header.apply_to(format!("=== {} ===", title)))
    }

    /// Format a hint line.
    pub fn format_hint(&self, hint: &str) -> String {
        format!("{}", self.hint.apply_to(format!("→ {}", hint)))
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // https://no-color.org/
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}

/// Check if log lines on stderr should carry ANSI colors.
pub fn should_color_logs(colors_requested: bool) -> bool {
    colors_requested && std::env::var_os("NO_COLOR").is_none() && console::Term::stderr().is_term()
}
