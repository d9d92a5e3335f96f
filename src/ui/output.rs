//! Output verbosity mode.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Report plus extra detail (search path totals).
    Verbose,
    /// Report and hints.
    #[default]
    Normal,
    /// Report only, no hints.
    Quiet,
}

impl OutputMode {
    /// Pick a mode from the `--quiet` / `--verbose` flags. Quiet wins.
    pub fn from_flags(quiet: bool, verbose: bool) -> Self {
        if quiet {
            Self::Quiet
        } else if verbose {
            Self::Verbose
        } else {
            Self::Normal
        }
    }

    /// Check if this mode shows fix hints.
    pub fn shows_hints(&self) -> bool {
        !matches!(self, Self::Quiet)
    }

    /// Check if this mode shows extra detail lines.
    pub fn shows_details(&self) -> bool {
        matches!(self, Self::Verbose)
    }
}
