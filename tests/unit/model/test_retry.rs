use reqwest::StatusCode;
use std::time::Duration;
use trefle_client::model::retry::RetryConfig;

#[test]
fn test_retry_config_defaults() {
    let config = RetryConfig {
        max_retry_count: None,
        backoff_ms: None,
    };
    assert_eq!(config.max_retries(), 5);
    assert_eq!(config.backoff_ms(), 100);
}

#[test]
fn test_retry_config_disabled() {
    let config = RetryConfig::disabled();
    assert_eq!(config.max_retries(), 0);
    assert_eq!(config.delay_for(1), Duration::ZERO);
}

#[test]
fn test_retry_config_with_max_retries() {
    let config = RetryConfig::with_max_retries(3);
    assert_eq!(config.max_retries(), 3);
    assert_eq!(config.backoff_ms(), 100);
}

#[test]
fn test_retry_backoff_doubles() {
    let config = RetryConfig::with_max_retries_and_backoff(5, 100);
    assert_eq!(config.delay_for(1), Duration::from_millis(100));
    assert_eq!(config.delay_for(2), Duration::from_millis(200));
    assert_eq!(config.delay_for(4), Duration::from_millis(800));
}

#[test]
fn test_retryable_statuses() {
    for status in [
        StatusCode::TOO_MANY_REQUESTS,
        StatusCode::INTERNAL_SERVER_ERROR,
        StatusCode::BAD_GATEWAY,
        StatusCode::SERVICE_UNAVAILABLE,
        StatusCode::GATEWAY_TIMEOUT,
    ] {
        assert!(RetryConfig::is_retryable(status), "{status} should be retried");
    }
    assert!(!RetryConfig::is_retryable(StatusCode::NOT_FOUND));
    assert!(!RetryConfig::is_retryable(StatusCode::UNAUTHORIZED));
}
