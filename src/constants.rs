/******************************************************************************
   Author: Trefle Client Contributors
   Date: 16/10/26
******************************************************************************/

/// Root URL of the Trefle service; pagination links are resolved against it
pub const BASE_URL: &str = "https://trefle.io/";
/// API version segment used when building endpoint URLs
pub const API_VERSION: &str = "v1";
/// Name of the query parameter carrying the access token
pub const TOKEN_PARAM: &str = "token";
/// Path of the endpoint issuing client-side tokens, relative to the site root
pub const AUTH_CLAIM_PATH: &str = "/api/auth/claim";
/// User agent string sent with every request
pub const USER_AGENT: &str = concat!("trefle-client/", env!("CARGO_PKG_VERSION"));
/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Trefle allows 120 requests per minute for a token
pub const DEFAULT_RATE_LIMIT_MAX_REQUESTS: u32 = 120;
/// Rate limit window in seconds
pub const DEFAULT_RATE_LIMIT_PERIOD_SECONDS: u64 = 60;
/// Requests that may be sent back to back before pacing kicks in
pub const DEFAULT_RATE_LIMIT_BURST_SIZE: u32 = 10;
/// Number of retries on a retryable status
pub const DEFAULT_MAX_RETRIES: u32 = 5;
/// Base delay in milliseconds for exponential retry backoff
pub const DEFAULT_RETRY_BACKOFF_MS: u64 = 100;
/// Statuses that are retried before giving up
pub const RETRY_STATUSES: [u16; 5] = [429, 500, 502, 503, 504];
/// Layout of the `expiration` field returned by the auth claim endpoint
pub const CLAIM_EXPIRATION_FORMAT: &str = "%m-%d-%Y %H:%M";
