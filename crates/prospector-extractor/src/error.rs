//! Error types for the extraction pipeline

use prospector_domain::{CallFailure, ValidationError};
use std::fmt;
use thiserror::Error;

/// Closed classification of extraction failures.
///
/// Exactly four kinds exist; there is no catch-all. Unanticipated faults
/// from the injected call are folded into `Provider` or `Timeout` at the
/// call boundary, never surfaced unclassified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// Response was not valid JSON, or failed lead validation
    ModelInvalidOutput,
    /// The LLM call did not complete within the allotted time
    Timeout,
    /// Service-level fault (auth, quota, network) before a response existed
    Provider,
    /// Valid extraction, but no email and no phone
    EmptyLead,
}

impl FailureKind {
    /// Stable name used in logs and machine output.
    pub fn as_str(self) -> &'static str {
        match self {
            FailureKind::ModelInvalidOutput => "MODEL_INVALID_OUTPUT",
            FailureKind::Timeout => "TIMEOUT",
            FailureKind::Provider => "PROVIDER_ERROR",
            FailureKind::EmptyLead => "EMPTY_LEAD",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One terminal failure from the pipeline.
///
/// The reason string is human-readable and never contains the raw model
/// response. Construction is pure data assembly; classification happens at
/// the point the failure is observed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractorError {
    /// LLM output failed JSON parsing or lead validation
    #[error("model returned invalid output: {0}")]
    ModelInvalidOutput(String),

    /// LLM call timed out
    #[error("LLM call timed out: {0}")]
    Timeout(String),

    /// Provider-level fault, not attributable to model output
    #[error("provider error: {0}")]
    Provider(String),

    /// Lead validated but carries no contact info
    #[error("lead has no contact info: {0}")]
    EmptyLead(String),
}

impl ExtractorError {
    /// The failure classification tag.
    pub fn kind(&self) -> FailureKind {
        match self {
            ExtractorError::ModelInvalidOutput(_) => FailureKind::ModelInvalidOutput,
            ExtractorError::Timeout(_) => FailureKind::Timeout,
            ExtractorError::Provider(_) => FailureKind::Provider,
            ExtractorError::EmptyLead(_) => FailureKind::EmptyLead,
        }
    }

    /// The human-readable cause.
    pub fn reason(&self) -> &str {
        match self {
            ExtractorError::ModelInvalidOutput(reason)
            | ExtractorError::Timeout(reason)
            | ExtractorError::Provider(reason)
            | ExtractorError::EmptyLead(reason) => reason,
        }
    }
}

impl From<CallFailure> for ExtractorError {
    fn from(failure: CallFailure) -> Self {
        match failure {
            CallFailure::Timeout(reason) => ExtractorError::Timeout(reason),
            CallFailure::Provider(reason) => ExtractorError::Provider(reason),
        }
    }
}

impl From<ValidationError> for ExtractorError {
    fn from(e: ValidationError) -> Self {
        ExtractorError::ModelInvalidOutput(e.to_string())
    }
}
