/******************************************************************************
   Author: Trefle Client Contributors
   Date: 16/10/26
******************************************************************************/
use crate::constants::{DEFAULT_MAX_RETRIES, DEFAULT_RETRY_BACKOFF_MS, RETRY_STATUSES};
use crate::utils::config::get_env_or_none;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for retrying requests that fail with a transient status
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Maximum number of retries (None = use default of 5)
    pub max_retry_count: Option<u32>,
    /// Base backoff in milliseconds (None = use default of 100)
    pub backoff_ms: Option<u64>,
}

impl RetryConfig {
    /// Creates a retry configuration from `MAX_RETRY_COUNT` and `RETRY_BACKOFF_MS`
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration that never retries
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            max_retry_count: Some(0),
            backoff_ms: Some(0),
        }
    }

    /// Creates a retry configuration with a maximum number of retries
    #[must_use]
    pub fn with_max_retries(max_retries: u32) -> Self {
        Self {
            max_retry_count: Some(max_retries),
            backoff_ms: None,
        }
    }

    /// Creates a retry configuration with both max retries and base backoff
    #[must_use]
    pub fn with_max_retries_and_backoff(max_retries: u32, backoff_ms: u64) -> Self {
        Self {
            max_retry_count: Some(max_retries),
            backoff_ms: Some(backoff_ms),
        }
    }

    /// Gets the maximum retry count (0 = no retries)
    #[must_use]
    pub fn max_retries(&self) -> u32 {
        self.max_retry_count.unwrap_or(DEFAULT_MAX_RETRIES)
    }

    /// Gets the base backoff in milliseconds
    #[must_use]
    pub fn backoff_ms(&self) -> u64 {
        self.backoff_ms.unwrap_or(DEFAULT_RETRY_BACKOFF_MS)
    }

    /// Delay before retry number `attempt` (1-based): `backoff * 2^(attempt-1)`
    #[must_use]
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let factor = 1u64 << attempt.saturating_sub(1).min(16);
        Duration::from_millis(self.backoff_ms().saturating_mul(factor))
    }

    /// Whether a response with `status` should be retried
    #[must_use]
    pub fn is_retryable(status: StatusCode) -> bool {
        RETRY_STATUSES.contains(&status.as_u16())
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retry_count: get_env_or_none("MAX_RETRY_COUNT"),
            backoff_ms: get_env_or_none("RETRY_BACKOFF_MS"),
        }
    }
}
