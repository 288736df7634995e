//! Core extraction pipeline

use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::parser::parse_response;
use crate::prompt::PromptBuilder;
use crate::retry::{attempts_remain, backoff_delay, is_retriable, log_attempt_failure};
use prospector_domain::{Lead, LlmCall};
use prospector_llm::OpenAiProvider;
use std::sync::Arc;
use tokio::time::timeout;
use tracing::{debug, info};

/// The LeadExtractor converts unstructured text into a validated lead.
///
/// One `extract` call runs a strictly sequential attempt loop: invoke the
/// injected LLM call, parse its response, validate the draft, apply the
/// empty-lead rule, and route every failure through the retry policy. The
/// extractor holds no per-call state, so a single instance can serve
/// concurrent invocations.
pub struct LeadExtractor<L: LlmCall> {
    llm: Arc<L>,
    config: ExtractorConfig,
}

impl<L> LeadExtractor<L>
where
    L: LlmCall + Send + Sync + 'static,
{
    /// Create a new LeadExtractor
    pub fn new(llm: L, config: ExtractorConfig) -> Self {
        Self {
            llm: Arc::new(llm),
            config,
        }
    }

    /// Extract a lead from raw text.
    ///
    /// Returns `Ok` only for a lead carrying contact info; every other
    /// outcome is a classified [`ExtractorError`]. No panic, raw response
    /// text, or unclassified fault crosses this boundary.
    pub async fn extract(&self, text: &str) -> Result<Lead, ExtractorError> {
        let prompt = PromptBuilder::new(text).build();

        debug!("prompt length: {} chars", prompt.len());

        for attempt in 1..=self.config.max_attempts {
            match self.attempt(&prompt).await {
                Ok(lead) => {
                    info!(attempt, "extraction succeeded");
                    return Ok(lead);
                }
                Err(e) => {
                    let will_retry =
                        attempts_remain(attempt, self.config.max_attempts) && is_retriable(&e);
                    log_attempt_failure(attempt, &e, will_retry);

                    if !will_retry {
                        return Err(e);
                    }

                    let delay = backoff_delay(attempt, self.config.backoff_base());
                    info!("retry in {:.1}s", delay.as_secs_f64());
                    tokio::time::sleep(delay).await;
                }
            }
        }

        // Reachable only with a zero-attempt config; validate() rejects it,
        // but the loop must still terminate into a classified error.
        Err(ExtractorError::ModelInvalidOutput(
            "no extraction attempts were made".to_string(),
        ))
    }

    /// One attempt: call, parse, validate, empty-lead rule.
    async fn attempt(&self, prompt: &str) -> Result<Lead, ExtractorError> {
        let raw = self.call_llm(prompt).await?;

        debug!("response length: {} chars", raw.len());

        let draft = parse_response(&raw)?;
        let lead = draft.validate()?;

        // Empty-lead rule: a lead without contact info is never a success.
        if !lead.has_contact() {
            return Err(ExtractorError::EmptyLead(
                "no email or phone extracted; lead has no contact info".to_string(),
            ));
        }

        Ok(lead)
    }

    /// Run the injected call on the blocking pool under the guard timeout.
    async fn call_llm(&self, prompt: &str) -> Result<String, ExtractorError> {
        let llm = Arc::clone(&self.llm);
        let prompt = prompt.to_string();

        let call = tokio::task::spawn_blocking(move || llm.call(&prompt));

        match timeout(self.config.call_timeout(), call).await {
            Err(_) => Err(ExtractorError::Timeout(format!(
                "LLM call exceeded {}s",
                self.config.call_timeout_secs
            ))),
            // A panicked or cancelled call task is an infrastructure fault
            Ok(Err(join_error)) => Err(ExtractorError::Provider(format!(
                "LLM call task failed: {}",
                join_error
            ))),
            Ok(Ok(result)) => result.map_err(ExtractorError::from),
        }
    }
}

/// Extract a lead from raw text with an injected LLM call and the default
/// configuration.
///
/// This is the main entry point for callers that do not need to tune the
/// pipeline. The injected call makes the branching logic fully
/// deterministic under test; pass a real provider in production.
pub async fn extract_lead<L>(text: &str, llm_call: L) -> Result<Lead, ExtractorError>
where
    L: LlmCall + Send + Sync + 'static,
{
    LeadExtractor::new(llm_call, ExtractorConfig::default())
        .extract(text)
        .await
}

/// Extract a lead using the OpenAI provider configured from the process
/// environment (`OPENAI_API_KEY`, optional `OPENAI_EXTRACTION_MODEL`).
pub async fn extract_lead_default(text: &str) -> Result<Lead, ExtractorError> {
    let provider = OpenAiProvider::from_env().map_err(ExtractorError::from)?;
    extract_lead(text, provider).await
}
