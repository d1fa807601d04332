//! `bsort`: command line front end for the bitonic sort library

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use bitonic::cli;

fn main() -> ExitCode {
    // Diagnostics go to stderr at error level unless RUST_LOG says
    // otherwise; sorted output owns stdout.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error")))
        .with_writer(std::io::stderr)
        .init();

    let args = cli::Args::parse();

    match cli::run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err}");
            if !args.quiet {
                eprintln!("Try 'bsort --help' for more information.");
            }
            ExitCode::FAILURE
        }
    }
}
