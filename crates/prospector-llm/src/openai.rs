//! OpenAI Provider Implementation
//!
//! Integration with the OpenAI chat-completions API.
//!
//! # Features
//!
//! - Async HTTP communication with the completions endpoint
//! - Configurable model, credentials from the process environment
//! - Request timeout handling
//!
//! # Examples
//!
//! ```no_run
//! use prospector_llm::OpenAiProvider;
//!
//! let provider = OpenAiProvider::new("sk-...", "gpt-4o-mini");
//!
//! // `complete` is async; the blocking `LlmCall` impl wraps it for the
//! // extraction pipeline.
//! ```

use prospector_domain::{CallFailure, LlmCall};
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

/// Default chat-completions endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";

/// Default model when `OPENAI_EXTRACTION_MODEL` is not set
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Default timeout for LLM requests (30 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Environment variable holding the API key
pub const API_KEY_VAR: &str = "OPENAI_API_KEY";

/// Environment variable overriding the model name
pub const MODEL_VAR: &str = "OPENAI_EXTRACTION_MODEL";

/// OpenAI chat-completions provider.
///
/// One `call` is a single request; retry decisions belong to the
/// extraction pipeline, not to the provider.
pub struct OpenAiProvider {
    endpoint: String,
    api_key: String,
    model: String,
    client: reqwest::Client,
}

/// Request body for the chat-completions API
#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
}

#[derive(Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

/// Response body from the chat-completions API
#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

impl OpenAiProvider {
    /// Create a provider with explicit credentials and model.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .unwrap();

        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: api_key.into(),
            model: model.into(),
            client,
        }
    }

    /// Create a provider from the process environment.
    ///
    /// Reads the key from `OPENAI_API_KEY` and the model from
    /// `OPENAI_EXTRACTION_MODEL` (falling back to [`DEFAULT_MODEL`]).
    ///
    /// # Errors
    ///
    /// Returns `CallFailure::Provider` when the key is not set, so a
    /// misconfigured environment surfaces as the provider fault it is.
    pub fn from_env() -> Result<Self, CallFailure> {
        let api_key = env::var(API_KEY_VAR)
            .map_err(|_| CallFailure::Provider(format!("{API_KEY_VAR} is not set")))?;
        let model = env::var(MODEL_VAR).unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        Ok(Self::new(api_key, model))
    }

    /// Override the model name.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Override the API endpoint (tests, proxies).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// The configured model name.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send the prompt and return the raw message content.
    ///
    /// # Errors
    ///
    /// - `CallFailure::Timeout` when the request exceeds the client timeout
    /// - `CallFailure::Provider` for connection faults, auth/quota
    ///   rejections, and any non-success status
    ///
    /// A 200 response with missing choices or empty content returns an
    /// empty string: a response body exists, so judging it is the
    /// pipeline's job.
    pub async fn complete(&self, prompt: &str) -> Result<String, CallFailure> {
        let request_body = ChatRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user",
                content: prompt.to_string(),
            }],
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    CallFailure::Timeout(format!("request exceeded {DEFAULT_TIMEOUT_SECS}s: {e}"))
                } else {
                    CallFailure::Provider(format!("request failed: {e}"))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_else(|_| "no body".to_string());
            return Err(match status.as_u16() {
                401 | 403 => CallFailure::Provider(format!("authentication failed: {detail}")),
                429 => CallFailure::Provider(format!("rate limited: {detail}")),
                _ => CallFailure::Provider(format!("HTTP {status}: {detail}")),
            });
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| CallFailure::Provider(format!("malformed completion envelope: {e}")))?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default();

        Ok(content.trim().to_string())
    }
}

impl LlmCall for OpenAiProvider {
    fn call(&self, prompt: &str) -> Result<String, CallFailure> {
        // Blocking wrapper for the async client; the pipeline runs this on
        // its blocking pool.
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| CallFailure::Provider(format!("failed to start runtime: {e}")))?;

        runtime.block_on(self.complete(prompt))
    }
}
