//! Binary entry point for `bosk`.
//!
//! Installs the tracing subscriber, hands the parsed arguments to the
//! command layer, and prints the summary on stdout. Failures are logged
//! through `tracing` together with their stable error code where one
//! exists, then mapped to a non-zero exit status.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, field};

use bosk_cli::{
    cli::{Cli, CliError, render_summary, run_cli},
    logging,
};

fn main() -> ExitCode {
    if let Err(error) = logging::init_logging() {
        eprintln!("cannot initialise logging: {error}");
        return ExitCode::FAILURE;
    }

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            let code = error
                .downcast_ref::<CliError>()
                .and_then(CliError::stable_code)
                .map(field::display);
            error!(error = %error, code, "bosk failed");
            ExitCode::FAILURE
        }
    }
}

/// Parses the command line, executes it, and renders the summary.
fn run() -> Result<()> {
    let summary = run_cli(Cli::parse())?;
    let mut stdout = BufWriter::new(io::stdout().lock());
    render_summary(&summary, &mut stdout).context("cannot write summary")?;
    stdout.flush().context("cannot flush stdout")
}
