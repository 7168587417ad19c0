// src/main.rs

use clap::Parser;
use files2md::cli::Cli;
use files2md::{report, ConfigBuilder, Error};
use std::process::ExitCode;

fn main() -> ExitCode {
    init_logging();

    let cli = Cli::parse();
    let config = match ConfigBuilder::from_cli(cli).build() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::from(2);
        }
    };

    match files2md::run(&config) {
        Ok(run_report) => {
            report::print_report(&config, &run_report);
            ExitCode::SUCCESS
        }
        Err(e @ Error::Config(_)) => {
            eprintln!("error: {e}");
            ExitCode::from(2)
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Structured logging to stderr; `RUST_LOG` overrides the default level.
fn init_logging() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
