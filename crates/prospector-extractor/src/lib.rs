//! Prospector Extractor
//!
//! Turns unstructured free text into a validated lead record by delegating
//! extraction to an LLM call behind a strict output contract.
//!
//! # Overview
//!
//! The extractor is the contract boundary between an unreliable external
//! model and a downstream CRM: callers receive either a fully validated
//! lead or a classified failure, never raw model output and never a panic.
//!
//! # Architecture
//!
//! ```text
//! Text → Prompt → LlmCall → JSON parse → Validation → Empty-lead rule → Lead
//!                    ↑                                                    |
//!                    └──────── retry policy (invalid output / timeout) ───┘
//! ```
//!
//! # Key Features
//!
//! - **Closed failure taxonomy**: exactly four kinds, matched exhaustively
//! - **Retry policy**: 3 attempts with exponential backoff, retrying only
//!   failures a new attempt can plausibly change
//! - **Injected LLM call**: deterministic tests without network access
//!
//! # Example Usage
//!
//! ```
//! use prospector_extractor::extract_lead;
//! use prospector_llm::MockCall;
//!
//! # async fn example() {
//! let call = MockCall::new(r#"{"name":"Test","email":"a@b.com","phone":null}"#);
//!
//! match extract_lead("Reach me at a@b.com - Test", call).await {
//!     Ok(lead) => println!("extracted: {:?}", lead.to_crm_payload()),
//!     Err(e) => println!("failed: {} ({})", e.reason(), e.kind()),
//! }
//! # }
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod extractor;
mod parser;
mod prompt;
mod retry;

#[cfg(test)]
mod tests;

pub use config::ExtractorConfig;
pub use error::{ExtractorError, FailureKind};
pub use extractor::{extract_lead, extract_lead_default, LeadExtractor};
pub use retry::MAX_ATTEMPTS;
