//! Retry policy: fixed attempt budget, exponential backoff, retry only on
//! invalid output or timeout.

use crate::error::{ExtractorError, FailureKind};
use std::time::Duration;
use tracing::warn;

/// Attempt budget for one extraction call, including the first attempt.
pub const MAX_ATTEMPTS: u32 = 3;

/// True only for failures another attempt can plausibly change.
///
/// Provider faults and empty leads are terminal: one is a credential or
/// infrastructure problem, the other is a property of the input text.
pub fn is_retriable(error: &ExtractorError) -> bool {
    matches!(
        error.kind(),
        FailureKind::ModelInvalidOutput | FailureKind::Timeout
    )
}

/// Backoff before the attempt after `attempt` failed: base, 2x, 4x...
///
/// `attempt` is 1-based. No jitter and no cap; the fixed attempt ceiling
/// bounds the total wait.
pub fn backoff_delay(attempt: u32, base: Duration) -> Duration {
    base * 2u32.pow(attempt.saturating_sub(1))
}

/// Whether the budget allows another attempt after `attempt` failed.
pub fn attempts_remain(attempt: u32, max_attempts: u32) -> bool {
    attempt < max_attempts
}

/// Report a failed attempt before the policy acts on it.
///
/// Observability only: the decision travels in `will_retry`, it is never
/// derived from the log. Fires for every failure, including the one that
/// exhausts the budget.
pub fn log_attempt_failure(attempt: u32, error: &ExtractorError, will_retry: bool) {
    warn!(
        attempt,
        failure_type = %error.kind(),
        reason = error.reason(),
        will_retry,
        "extraction attempt failed"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_invalid_output_and_timeout_retry() {
        let invalid = ExtractorError::ModelInvalidOutput("bad json".to_string());
        let timeout = ExtractorError::Timeout("30s".to_string());
        let provider = ExtractorError::Provider("auth".to_string());
        let empty = ExtractorError::EmptyLead("no contact".to_string());

        assert!(is_retriable(&invalid));
        assert!(is_retriable(&timeout));
        assert!(!is_retriable(&provider));
        assert!(!is_retriable(&empty));
    }

    #[test]
    fn test_backoff_doubles_per_attempt() {
        let base = Duration::from_secs(1);
        assert_eq!(backoff_delay(1, base), Duration::from_secs(1));
        assert_eq!(backoff_delay(2, base), Duration::from_secs(2));
        assert_eq!(backoff_delay(3, base), Duration::from_secs(4));
    }

    #[test]
    fn test_backoff_scales_with_base() {
        let base = Duration::from_millis(50);
        assert_eq!(backoff_delay(1, base), Duration::from_millis(50));
        assert_eq!(backoff_delay(2, base), Duration::from_millis(100));
    }

    #[test]
    fn test_attempts_remain_within_budget() {
        assert!(attempts_remain(1, MAX_ATTEMPTS));
        assert!(attempts_remain(2, MAX_ATTEMPTS));
        assert!(!attempts_remain(3, MAX_ATTEMPTS));
    }
}
