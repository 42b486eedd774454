//! Toolchest CLI entry point.

use std::process::ExitCode;

use toolchest::cli::{build_cli, CommandDispatcher};
use toolchest::frameworks::{discover, SetupOutcome};
use toolchest::host::Host;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("toolchest=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("toolchest=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    // Discovery logs before the parser tree can exist, so the debug flag
    // is peeked from argv instead of waiting for clap.
    let debug = std::env::args().any(|arg| arg == "--debug" || arg == "-d");
    init_tracing(debug);

    let host = match Host::detect() {
        Ok(host) => host,
        Err(e) => {
            tracing::error!("Could not detect the host environment: {e}");
            return ExitCode::from(1);
        }
    };

    let registry = discover(&host);
    let matches = build_cli(&registry).get_matches();

    let dispatcher = CommandDispatcher::new(&registry, &host);
    match dispatcher.dispatch(&matches) {
        Ok(SetupOutcome::Completed | SetupOutcome::Refused) => ExitCode::SUCCESS,
        Ok(SetupOutcome::Elevated(status)) => ExitCode::from(status.clamp(0, 255) as u8),
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::from(1)
        }
    }
}
