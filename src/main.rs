//! workdir-diag CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use workdir_diag::cli::{Cli, CommandDispatcher};
use workdir_diag::ui::{create_ui, should_color_logs, OutputMode};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN, so logs stay out of the report
///
/// ANSI colors follow the same `--no-color` / `NO_COLOR` decision as the report.
fn init_tracing(debug: bool, ansi: bool) {
    let filter = if debug {
        EnvFilter::new("workdir_diag=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("workdir_diag=warn"))
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_ansi(ansi)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug, should_color_logs(!cli.no_color));

    tracing::debug!("workdir-diag starting with args: {:?}", cli);

    let output_mode = OutputMode::from_flags(cli.quiet, cli.verbose);
    let mut ui = create_ui(output_mode, !cli.no_color);

    let dispatcher = CommandDispatcher::new();

    match dispatcher.dispatch(&cli, ui.as_mut()) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
