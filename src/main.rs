use std::{io::IsTerminal, process::ExitCode};

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

mod command;
mod store;

#[derive(Parser, Debug)]
#[command(author, version)]
/// Command-line utility for keeping a small list of user records in a JSON file
///
/// Records are addressed by their zero-based position in the file.
struct Args {
    #[command(subcommand)]
    command: command::Command,

    /// Log debug output to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,
}

fn init_logging(verbose: bool) -> anyhow::Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .try_init()
        .map_err(|e| anyhow::anyhow!("{e}"))
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = init_logging(args.verbose) {
        eprintln!("Failed to initialize logging: {e}");
    }

    match args.command.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, cause = %store::source_of(&e), "command failed");
            ExitCode::FAILURE
        }
    }
}
