//! Extract command implementation.

use crate::cli::ExtractArgs;
use crate::commands::provider_from_env;
use crate::error::Result;
use crate::output::Formatter;
use prospector_extractor::extract_lead;
use prospector_llm::OpenAiProvider;
use std::process::ExitCode;

/// Execute the extract command against the real provider.
pub async fn execute_extract(
    args: ExtractArgs,
    model_override: Option<&str>,
    formatter: &Formatter,
) -> Result<ExitCode> {
    let provider = provider_from_env(model_override)?;

    run_extract(&args.text, provider, formatter).await
}

/// Run one extraction and print the outcome.
///
/// An extraction failure is a reported result, not a CLI error: it is
/// printed through the formatter and reflected in the exit code.
async fn run_extract(
    text: &str,
    provider: OpenAiProvider,
    formatter: &Formatter,
) -> Result<ExitCode> {
    match extract_lead(text, provider).await {
        Ok(lead) => {
            println!("{}", formatter.format_lead(&lead)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            println!("{}", formatter.format_failure(&e)?);
            Ok(ExitCode::FAILURE)
        }
    }
}
