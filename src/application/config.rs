/******************************************************************************
   Author: Trefle Client Contributors
   Date: 16/10/26
******************************************************************************/

use crate::constants::{
    API_VERSION, BASE_URL, DEFAULT_RATE_LIMIT_BURST_SIZE, DEFAULT_RATE_LIMIT_MAX_REQUESTS,
    DEFAULT_RATE_LIMIT_PERIOD_SECONDS, DEFAULT_TIMEOUT_SECS,
};
use crate::model::requests::QueryParams;
use crate::model::retry::RetryConfig;
use crate::utils::config::{get_env_or_default, get_env_or_none};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Authentication credentials for the Trefle API
pub struct Credentials {
    /// Access token from the account settings page, sent as the `token` parameter
    pub token: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Site root; endpoint paths live under `{base_url}api/{version}/`
    pub base_url: String,
    /// API version segment, e.g. `v1`
    pub version: String,
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for rate limiting API requests
pub struct RateLimiterConfig {
    /// Maximum number of requests allowed per period
    pub max_requests: u32,
    /// Time period in seconds for the rate limit
    pub period_seconds: u64,
    /// Burst size - maximum number of requests that can be made at once
    pub burst_size: u32,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration for the Trefle API client
pub struct Config {
    /// Authentication credentials
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Rate limiter configuration for API requests
    pub rate_limiter: RateLimiterConfig,
    /// Retry behaviour on transient statuses
    pub retry: RetryConfig,
    /// Parameters added to every request after the token, e.g. `page_size`
    pub default_params: QueryParams,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a configuration from the environment
    ///
    /// Loads a `.env` file if present, then reads `TREFLE_TOKEN`,
    /// `TREFLE_BASE_URL`, `TREFLE_API_VERSION`, `TREFLE_TIMEOUT`,
    /// `TREFLE_PAGE_SIZE` and the `TREFLE_RATE_LIMIT_*` variables.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let token = get_env_or_default("TREFLE_TOKEN", String::new());
        if token.is_empty() {
            error!("TREFLE_TOKEN not found in environment variables or .env file");
        }

        let mut default_params = QueryParams::new();
        if let Some(page_size) = get_env_or_none::<u32>("TREFLE_PAGE_SIZE") {
            default_params.insert("page_size", page_size);
        }

        Config {
            credentials: Credentials { token },
            rest_api: RestApiConfig {
                base_url: normalize_base_url(&get_env_or_default(
                    "TREFLE_BASE_URL",
                    String::from(BASE_URL),
                )),
                version: get_env_or_default("TREFLE_API_VERSION", String::from(API_VERSION)),
                timeout: get_env_or_default("TREFLE_TIMEOUT", DEFAULT_TIMEOUT_SECS),
            },
            rate_limiter: RateLimiterConfig {
                max_requests: get_env_or_default(
                    "TREFLE_RATE_LIMIT_MAX_REQUESTS",
                    DEFAULT_RATE_LIMIT_MAX_REQUESTS,
                ),
                period_seconds: get_env_or_default(
                    "TREFLE_RATE_LIMIT_PERIOD_SECONDS",
                    DEFAULT_RATE_LIMIT_PERIOD_SECONDS,
                ),
                burst_size: get_env_or_default(
                    "TREFLE_RATE_LIMIT_BURST_SIZE",
                    DEFAULT_RATE_LIMIT_BURST_SIZE,
                ),
            },
            retry: RetryConfig::default(),
            default_params,
        }
    }

    /// Creates a configuration with built-in defaults and an explicit token
    ///
    /// Unlike [`Config::new`] nothing is read from the environment.
    pub fn with_token(token: impl Into<String>) -> Self {
        Config {
            credentials: Credentials {
                token: token.into(),
            },
            rest_api: RestApiConfig {
                base_url: BASE_URL.to_string(),
                version: API_VERSION.to_string(),
                timeout: DEFAULT_TIMEOUT_SECS,
            },
            rate_limiter: RateLimiterConfig {
                max_requests: DEFAULT_RATE_LIMIT_MAX_REQUESTS,
                period_seconds: DEFAULT_RATE_LIMIT_PERIOD_SECONDS,
                burst_size: DEFAULT_RATE_LIMIT_BURST_SIZE,
            },
            retry: RetryConfig {
                max_retry_count: None,
                backoff_ms: None,
            },
            default_params: QueryParams::new(),
        }
    }

    /// Replaces the site root, adding the trailing slash if missing
    #[must_use]
    pub fn base_url(mut self, base_url: &str) -> Self {
        self.rest_api.base_url = normalize_base_url(base_url);
        self
    }

    /// Adds a parameter sent with every request
    #[must_use]
    pub fn default_param(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.default_params.insert(key, value);
        self
    }

    /// Replaces the retry configuration
    #[must_use]
    pub fn retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    /// `{base_url}api/{version}/`, the root of every endpoint path
    #[must_use]
    pub fn api_version_url(&self) -> String {
        format!("{}api/{}/", self.rest_api.base_url, self.rest_api.version)
    }
}

fn normalize_base_url(base_url: &str) -> String {
    format!("{}/", base_url.trim_end_matches('/'))
}
