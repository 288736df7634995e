//! Prospector LLM Provider Layer
//!
//! Implementations of the `LlmCall` trait from `prospector-domain`.
//!
//! # Providers
//!
//! - `MockCall`: deterministic scripted call for testing
//! - `OpenAiProvider`: OpenAI chat-completions API integration
//!
//! # Examples
//!
//! ```
//! use prospector_llm::MockCall;
//! use prospector_domain::LlmCall;
//!
//! let call = MockCall::new(r#"{"name":null,"email":"a@b.com","phone":null}"#);
//! let raw = call.call("any prompt").unwrap();
//! assert!(raw.contains("a@b.com"));
//! ```

#![warn(missing_docs)]

pub mod openai;

use prospector_domain::{CallFailure, LlmCall};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

pub use openai::OpenAiProvider;

/// Deterministic LLM call for testing.
///
/// Returns pre-configured outcomes without any network access. A scripted
/// mock plays its steps in order and then repeats the final one, so a test
/// can model "two bad responses, then a good one" exactly.
///
/// # Examples
///
/// ```
/// use prospector_llm::MockCall;
/// use prospector_domain::{CallFailure, LlmCall};
///
/// let call = MockCall::script(vec![
///     Ok("not json".to_string()),
///     Err(CallFailure::Timeout("simulated".to_string())),
///     Ok(r#"{"email":"a@b.com"}"#.to_string()),
/// ]);
///
/// assert_eq!(call.call("p").unwrap(), "not json");
/// assert!(call.call("p").is_err());
/// assert!(call.call("p").unwrap().contains("a@b.com"));
/// assert_eq!(call.call_count(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct MockCall {
    script: Arc<Mutex<VecDeque<Result<String, CallFailure>>>>,
    last: Arc<Mutex<Result<String, CallFailure>>>,
    calls: Arc<Mutex<usize>>,
}

impl MockCall {
    /// A mock that returns the same response for every prompt.
    pub fn new(response: impl Into<String>) -> Self {
        Self::script(vec![Ok(response.into())])
    }

    /// A mock that fails the same way on every prompt.
    pub fn failing(failure: CallFailure) -> Self {
        Self::script(vec![Err(failure)])
    }

    /// A mock that plays `steps` in order, repeating the last step once the
    /// script is exhausted.
    ///
    /// # Panics
    ///
    /// Panics if `steps` is empty (a call with no behavior is a test bug).
    pub fn script(steps: Vec<Result<String, CallFailure>>) -> Self {
        assert!(!steps.is_empty(), "MockCall::script needs at least one step");

        let mut queue: VecDeque<_> = steps.into();
        // The final step becomes the repeat-forever tail
        let last = queue.pop_back().unwrap();

        Self {
            script: Arc::new(Mutex::new(queue)),
            last: Arc::new(Mutex::new(last)),
            calls: Arc::new(Mutex::new(0)),
        }
    }

    /// Number of times `call` was invoked, shared across clones.
    pub fn call_count(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

impl LlmCall for MockCall {
    fn call(&self, _prompt: &str) -> Result<String, CallFailure> {
        *self.calls.lock().unwrap() += 1;

        if let Some(step) = self.script.lock().unwrap().pop_front() {
            return step;
        }
        self.last.lock().unwrap().clone()
    }
}
