use filearg_core::logging;

mod cli;

use crate::cli::CliCommand;

fn main() {
    // Stderr if the log file is unusable.
    let destination = logging::init();
    tracing::debug!(?destination, "logging ready");

    // Parse CLI and dispatch.
    if let Err(err) = CliCommand::run_from_args() {
        eprintln!("filearg error: {:#}", err);
        std::process::exit(1);
    }
}
