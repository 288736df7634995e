//! Configuration for the extraction pipeline

use crate::retry::MAX_ATTEMPTS;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the lead extraction pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Attempt budget per extraction call, including the first attempt
    pub max_attempts: u32,

    /// Maximum time for a single LLM call (seconds)
    pub call_timeout_secs: u64,

    /// Base backoff delay before a retry (milliseconds); doubles per attempt
    pub backoff_base_ms: u64,
}

impl ExtractorConfig {
    /// Get the per-call timeout as a Duration
    pub fn call_timeout(&self) -> Duration {
        Duration::from_secs(self.call_timeout_secs)
    }

    /// Get the base backoff delay as a Duration
    pub fn backoff_base(&self) -> Duration {
        Duration::from_millis(self.backoff_base_ms)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_attempts == 0 {
            return Err("max_attempts must be at least 1".to_string());
        }
        if self.call_timeout_secs == 0 {
            return Err("call_timeout_secs must be greater than 0".to_string());
        }
        Ok(())
    }
}

impl Default for ExtractorConfig {
    /// Default configuration: the 3-attempt budget with 1s/2s backoff and a
    /// 30 second call timeout
    fn default() -> Self {
        Self {
            max_attempts: MAX_ATTEMPTS,
            call_timeout_secs: 30,
            backoff_base_ms: 1_000,
        }
    }
}

impl ExtractorConfig {
    /// Fast preset: shorter call timeout for latency-sensitive callers
    pub fn fast() -> Self {
        Self {
            max_attempts: MAX_ATTEMPTS,
            call_timeout_secs: 10,
            backoff_base_ms: 500,
        }
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}
