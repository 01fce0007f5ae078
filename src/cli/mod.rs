use std::process::ExitCode;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

pub mod args;
pub mod commands;
mod exit_status;
pub mod report;

pub use args::{Arguments, Command};
pub use exit_status::ExitStatus;

use commands::{export::export, get::get, init::init, languages::languages};

/// Environment variable holding a `tracing` filter, e.g. `LANGPACK_LOG=debug`.
pub const LOG_ENV: &str = "LANGPACK_LOG";

pub fn run_cli(args: Arguments) -> Result<ExitCode> {
    init_tracing(args.verbose());

    let Some(Arguments { command }) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success.into());
    };

    let status = match command {
        Some(Command::Init) => init()?,
        Some(Command::Languages(cmd)) => languages(cmd)?,
        Some(Command::Get(cmd)) => get(cmd)?,
        Some(Command::Export(cmd)) => export(cmd)?,
        None => anyhow::bail!("No command provided. Use --help to see available commands."),
    };

    Ok(status.into())
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("langpack=debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // A subscriber may already be installed when embedded in another binary.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
