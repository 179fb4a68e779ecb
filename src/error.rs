/******************************************************************************
   Author: Trefle Client Contributors
   Date: 16/10/26
******************************************************************************/

//! Error type for the Trefle client
//!
//! Every failure of the underlying HTTP stack, the JSON decoder or the URL
//! parser is wrapped into [`AppError`], keeping the original error as the
//! source so its message is never lost.

use reqwest::StatusCode;
use thiserror::Error;
use tracing::error;

/// Result alias used throughout the crate
pub type TrefleResult<T> = Result<T, AppError>;

/// Library error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Transport failure not covered by a more specific variant
    #[error("http error: {0}")]
    Http(#[source] reqwest::Error),

    /// The request timed out
    #[error("the request timed out: {0}")]
    Timeout(#[source] reqwest::Error),

    /// The redirect limit was reached
    #[error("the request had too many redirects: {0}")]
    TooManyRedirects(#[source] reqwest::Error),

    /// The service answered with a non-success status
    #[error("unexpected status {status}: {body}")]
    Status {
        /// HTTP status returned by the service
        status: StatusCode,
        /// Raw response body, usually a JSON error document
        body: String,
    },

    /// The response body was not valid JSON or had an unexpected shape
    #[error("invalid json in response: {0}")]
    Json(#[from] serde_json::Error),

    /// A path or pagination link could not be turned into a URL
    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),

    /// An argument value was not one of the accepted values
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl From<reqwest::Error> for AppError {
    /// Drops the request URL from the error, its query holds the token
    fn from(err: reqwest::Error) -> Self {
        let err = err.without_url();
        if err.is_timeout() {
            AppError::Timeout(err)
        } else if err.is_redirect() {
            AppError::TooManyRedirects(err)
        } else {
            AppError::Http(err)
        }
    }
}

impl AppError {
    /// Builds the error returned when `parameter` receives a value outside `allowed`
    #[must_use]
    pub fn invalid_argument(parameter: &str, allowed: &[&str]) -> Self {
        let values = allowed
            .iter()
            .map(|value| format!("'{value}'"))
            .collect::<Vec<_>>()
            .join(" or ");
        let message = format!("The parameter '{parameter}' can only be {values}.");
        error!("{}", message);
        AppError::InvalidInput(message)
    }

    /// Returns the HTTP status carried by the error, if any
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            AppError::Status { status, .. } => Some(*status),
            AppError::Http(e) | AppError::Timeout(e) | AppError::TooManyRedirects(e) => e.status(),
            _ => None,
        }
    }
}
