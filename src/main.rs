use std::{io, process::ExitCode};

use clap::{CommandFactory, Parser};
use colored::Colorize;
use tracing_subscriber::{EnvFilter, fmt};

mod bootstrap;
mod cli;
mod error;
mod git;
mod identity;
mod listing;
mod storage;

use crate::{
    bootstrap::ensure_initialized,
    cli::{Cli, Commands},
    error::AppError,
    listing::list_identities,
    storage::ConfigPaths,
};

/// Sends diagnostics to stderr, filtered by `RUST_LOG` (default `warn`)
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<(), AppError> {
    let paths: ConfigPaths = ConfigPaths::resolve()?;
    ensure_initialized(&paths)?;

    match cli.command {
        Some(Commands::List) => {
            let stdout = io::stdout();
            list_identities(&paths.config_file, &mut stdout.lock())?;
        }
        None => Cli::command().print_help()?,
    }
    Ok(())
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err.to_string().red());
            ExitCode::FAILURE
        }
    }
}
