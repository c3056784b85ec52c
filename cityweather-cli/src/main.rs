//! Binary crate for the `cityweather` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Interactive configuration
//! - The favorites menu loop

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod menu;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they never interleave with menu output.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cmd = cli::Cli::parse();
    cmd.run().await
}
