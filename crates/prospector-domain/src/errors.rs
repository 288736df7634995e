//! Validation failures for lead field values.

use thiserror::Error;

/// Errors produced when a raw field value fails validation.
///
/// These carry the offending value so the caller can report what was
/// rejected without ever exposing the surrounding model output.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Email does not match the `local@domain.tld` grammar
    #[error("invalid email address: {0:?}")]
    InvalidEmail(String),

    /// Phone does not normalize to 10-15 digits
    #[error("invalid phone number: {0}")]
    InvalidPhone(String),
}
