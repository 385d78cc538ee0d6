//! reqaudit CLI entry point.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use reqaudit::cli::{resolve_project_root, AuditCommand, Cli};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Exit status when the audit could not run at all.
const EXIT_FATAL: u8 = 1;

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
///
/// Logs go to stderr; stdout carries only the report.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("reqaudit=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("reqaudit=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("reqaudit starting with args: {:?}", cli);

    let project_root = match resolve_project_root(cli.project.clone()) {
        Ok(root) => root,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            return ExitCode::from(EXIT_FATAL);
        }
    };

    let command = AuditCommand::new(&project_root, cli.format);
    let mut stdout = io::stdout().lock();

    let outcome = if cli.list_rules {
        command.list_rules(&mut stdout)
    } else {
        command.execute(&mut stdout)
    };

    match outcome {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_FATAL)
        }
    }
}
