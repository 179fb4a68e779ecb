/******************************************************************************
   Author: Trefle Client Contributors
   Date: 16/10/26
******************************************************************************/

//! Rate limiter module for pacing API requests
//!
//! Trefle accepts a fixed number of requests per minute for a token. Requests
//! beyond that are answered with `429`, so the client paces itself with a
//! token bucket from the `governor` crate.

use crate::application::config::RateLimiterConfig;
use governor::{DefaultDirectRateLimiter, Quota, RateLimiter as GovernorRateLimiter};
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

/// Token bucket shared by every request of a client
#[derive(Clone)]
pub struct RateLimiter {
    limiter: Arc<DefaultDirectRateLimiter>,
}

impl RateLimiter {
    /// Creates a new rate limiter from configuration
    ///
    /// `max_requests` cells are replenished evenly over `period_seconds`, and up
    /// to `burst_size` requests may be sent back to back.
    ///
    /// # Example
    ///
    /// ```ignore
    /// use trefle_client::application::config::RateLimiterConfig;
    /// use trefle_client::application::rate_limiter::RateLimiter;
    ///
    /// let limiter = RateLimiter::new(&RateLimiterConfig {
    ///     max_requests: 120,
    ///     period_seconds: 60,
    ///     burst_size: 10,
    /// });
    /// ```
    #[must_use]
    pub fn new(config: &RateLimiterConfig) -> Self {
        let max_requests = config.max_requests.max(1);
        let replenish = Duration::from_secs(config.period_seconds) / max_requests;
        let burst_size = NonZeroU32::new(config.burst_size).unwrap_or(NonZeroU32::MIN);

        let quota = Quota::with_period(replenish)
            .unwrap_or_else(|| Quota::per_second(NonZeroU32::MAX))
            .allow_burst(burst_size);

        Self {
            limiter: Arc::new(GovernorRateLimiter::direct(quota)),
        }
    }

    /// Waits until the bucket allows one more request
    pub async fn wait(&self) {
        self.limiter.until_ready().await;
    }

    /// Takes a cell if one is available right now
    #[must_use]
    pub fn check(&self) -> bool {
        self.limiter.check().is_ok()
    }
}

impl std::fmt::Debug for RateLimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RateLimiter")
            .field("limiter", &"GovernorRateLimiter")
            .finish()
    }
}
