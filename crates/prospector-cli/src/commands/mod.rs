//! Command implementations.

pub mod demo;
pub mod extract;

pub use self::demo::execute_demo;
pub use self::extract::execute_extract;

use crate::error::{CliError, Result};
use prospector_llm::OpenAiProvider;

/// Build the real provider from the environment, with an optional model
/// override from the command line.
pub(crate) fn provider_from_env(model_override: Option<&str>) -> Result<OpenAiProvider> {
    let provider = OpenAiProvider::from_env().map_err(|_| {
        CliError::Environment(
            "OPENAI_API_KEY is not set (e.g. export OPENAI_API_KEY=sk-...)".to_string(),
        )
    })?;

    Ok(match model_override {
        Some(model) => provider.with_model(model),
        None => provider,
    })
}
