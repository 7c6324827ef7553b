//! Marquee CLI - Command-line interface
//!
//! Runs the API server and queries the catalog from the terminal.

mod commands;

use std::path::Path;

use clap::Parser;
use marquee_core::tracing_setup::{CliLogLevel, init_tracing};

#[derive(Parser)]
#[command(name = "marquee")]
#[command(about = "Tier-gated streaming catalog service")]
#[command(version)]
struct Cli {
    /// Console log level; the run log in logs/ always records everything
    #[arg(long, global = true, default_value_t = CliLogLevel::Info)]
    log_level: CliLogLevel,

    #[command(subcommand)]
    command: commands::Commands,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.log_level.as_tracing_level(), Some(Path::new("logs")))?;

    commands::handle_command(cli.command).await
}
