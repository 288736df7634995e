//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
///
/// Extraction failures are not in here: they are reported outcomes, printed
/// through the formatter and reflected in the exit code, not CLI faults.
#[derive(Debug, Error)]
pub enum CliError {
    /// Environment is not configured for the real provider
    #[error("{0}")]
    Environment(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
