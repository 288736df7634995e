//! Trait definitions for external interactions
//!
//! These traits define the boundary between domain logic and infrastructure.
//! Infrastructure implementations live in other crates.

use thiserror::Error;

/// Fault signaled by an [`LlmCall`] before any response body existed.
///
/// The two variants are the only ways a call may fail; anything else the
/// implementation encounters must be folded into the closest of the two.
/// Once a call returns a `String`, a response body exists and every later
/// problem is an output-quality question for the pipeline, not the call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CallFailure {
    /// The call did not complete within the allotted time
    #[error("LLM call timed out: {0}")]
    Timeout(String),

    /// Service-level fault: auth, quota, network, or any other fault
    /// attributable to the provider rather than to its output
    #[error("provider fault: {0}")]
    Provider(String),
}

/// One round trip to a language model: prompt text in, raw response out.
///
/// Implemented by the infrastructure layer (prospector-llm). The pipeline
/// takes any implementation by injection, so its branching logic can be
/// exercised deterministically without network access.
pub trait LlmCall {
    /// Send the prompt and return the raw response text.
    fn call(&self, prompt: &str) -> Result<String, CallFailure>;
}
