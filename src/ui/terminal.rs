//! Terminal UI writing the report to stdout.

use console::Term;
use std::io::Write;

use super::{DiagTheme, OutputMode, StatusKind, UserInterface};

/// Terminal UI implementation.
///
/// Report lines go to stdout; [`UserInterface::error`] goes to stderr.
pub struct TerminalUI {
    term: Term,
    err: Term,
    theme: DiagTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode, use_colors: bool) -> Self {
        let theme = if use_colors {
            DiagTheme::new()
        } else {
            DiagTheme::plain()
        };

        Self {
            term: Term::stdout(),
            err: Term::stderr(),
            theme,
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        writeln!(self.term, "{}", msg).ok();
    }

    fn status(&mut self, kind: StatusKind, msg: &str) {
        writeln!(self.term, "{}", kind.format(&self.theme, msg)).ok();
    }

    fn status_item(&mut self, kind: StatusKind, msg: &str) {
        writeln!(self.term, "  {}", kind.format(&self.theme, msg)).ok();
    }

    fn hint(&mut self, msg: &str) {
        if self.mode.shows_hints() {
            writeln!(self.term, "    {}", self.theme.format_hint(msg)).ok();
        }
    }

    fn show_header(&mut self, title: &str) {
        writeln!(self.term, "{}", self.theme.format_header(title)).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", StatusKind::Failed.format(&self.theme, msg)).ok();
    }
}

/// Create the UI for the given mode.
///
/// Colors are used only when requested and stdout supports them.
pub fn create_ui(mode: OutputMode, colors_requested: bool) -> Box<dyn UserInterface> {
    let use_colors = colors_requested && super::should_use_colors();
    if !use_colors {
        console::set_colors_enabled(false);
    }
    Box::new(TerminalUI::new(mode, use_colors))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_ui_output_mode() {
        let ui = TerminalUI::new(OutputMode::Quiet, false);
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
    }

    #[test]
    fn create_ui_respects_mode() {
        let ui = create_ui(OutputMode::Verbose, false);
        assert_eq!(ui.output_mode(), OutputMode::Verbose);
    }
}
