//! Binary crate for the `weather` command-line tool.
//!
//! This crate focuses on:
//! - Logging setup
//! - Running the fetch-and-render pipeline
//! - Mapping failures to output and exit status

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use weather_core::UpstreamError;

mod cli;

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    // Usage errors exit 1 like every other failure; --help/--version exit 0.
    let cmd = match cli::Cli::try_parse() {
        Ok(cmd) => cmd,
        Err(err) if err.use_stderr() => {
            let _ = err.print();
            return ExitCode::FAILURE;
        }
        Err(err) => err.exit(),
    };
    match cmd.run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "weather failed");
            // Upstream errors are user-facing results, not diagnostics.
            match err.downcast_ref::<UpstreamError>() {
                Some(upstream) => println!("{upstream}"),
                None => eprintln!("Error: {err:#}"),
            }
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so stdout only carries the rendered report.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();
}
