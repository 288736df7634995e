//! Prospector CLI - extract validated CRM leads from free text.

use clap::Parser;
use prospector_cli::commands;
use prospector_cli::{Cli, Command, Formatter};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    // Log to stderr so stdout stays clean for the extraction output
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> prospector_cli::Result<ExitCode> {
    let cli = Cli::parse();

    let color_enabled = !cli.no_color;
    let formatter = Formatter::new(cli.json, color_enabled);

    match cli.command {
        Command::Extract(args) => {
            commands::execute_extract(args, cli.model.as_deref(), &formatter).await
        }
        Command::Demo => commands::execute_demo(cli.model.as_deref(), &formatter).await,
    }
}
