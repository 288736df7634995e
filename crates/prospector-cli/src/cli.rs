//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};

/// Prospector CLI - extract validated CRM leads from free text.
#[derive(Debug, Parser)]
#[command(name = "prospector")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Emit machine-readable JSON instead of human output
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Model override (also via OPENAI_EXTRACTION_MODEL)
    #[arg(short, long, global = true)]
    pub model: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract a lead from one block of text
    Extract(ExtractArgs),

    /// Run the pipeline against the built-in demo inputs
    Demo,
}

/// Arguments for the extract command.
#[derive(Debug, Parser)]
pub struct ExtractArgs {
    /// Raw text to extract from (a form submission, an email body, ...)
    pub text: String,
}
