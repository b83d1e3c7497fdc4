//! crackvis command-line viewer
//!
//! Run with: cargo run --bin crackvis -- path/to/export.dat

use std::process::ExitCode;

use clap::Parser;
use crackvis::cli::{self, Args};
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).with_target(false).init();

    let args = Args::parse();
    match cli::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %format!("{:#}", e), "crackvis failed");
            ExitCode::FAILURE
        }
    }
}
