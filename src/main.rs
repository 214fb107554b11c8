//! Command line tool which prints values of each field of a cron expression.

use clap::Parser;
use cron_expander::expand_schedule;
use std::{io::Write, process::ExitCode};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Expand classic five-fields cron expression into the values of each field
#[derive(Debug, Parser)]
#[command(name = "cron-expander")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Cron expression to be parsed, i.e. "*/15 0 1,15 * 1-5"
    #[arg(short, long)]
    expression: String,
}

const EXIT_SUCCESS: u8 = 0;
const EXIT_FAILURE: u8 = 1;

fn main() -> ExitCode {
    // stdout is reserved for the report
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    ExitCode::from(run(&cli, &mut std::io::stdout().lock(), &mut std::io::stderr().lock()))
}

/// Writes the report into `out` or the error message into `err`, returns exit status.
fn run(cli: &Cli, out: &mut impl Write, err: &mut impl Write) -> u8 {
    let result = expand_schedule(&cli.expression)
        .map_err(|e| {
            tracing::debug!(expression = %cli.expression, error = ?e, "expansion failed");
            e.to_string()
        })
        .and_then(|report| writeln!(out, "{report}").map_err(|e| e.to_string()));

    match result {
        Ok(()) => EXIT_SUCCESS,
        Err(message) => {
            // nothing else to report if stderr is gone
            let _ = writeln!(err, "error: {message}");
            EXIT_FAILURE
        }
    }
}
