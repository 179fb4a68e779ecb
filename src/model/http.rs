/******************************************************************************
   Author: Trefle Client Contributors
   Date: 16/10/26
******************************************************************************/

use crate::application::config::Config;
use crate::application::rate_limiter::RateLimiter;
use crate::constants::{TOKEN_PARAM, USER_AGENT};
use crate::error::AppError;
use crate::model::requests::{Navigation, QueryParams};
use crate::model::responses::Links;
use crate::model::retry::RetryConfig;
use reqwest::header::ACCEPT;
use reqwest::{Client, Method, Response, StatusCode};
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, error, warn};
use url::Url;

/// Most recent successful response, kept to answer repeated requests and to
/// resolve pagination links
#[derive(Debug, Clone)]
pub struct LastResponse {
    /// Method the response was obtained with
    pub method: Method,
    /// Final URL of the request, token and query included
    pub url: String,
    /// Decoded JSON body
    pub body: Value,
}

/// Token-authenticated transport for the Trefle API
///
/// Owns the `reqwest` client, the rate limiter and the last-response slot.
/// Every request carries the token as the `token` query parameter, followed by
/// the configured default parameters and then the caller's parameters.
pub struct HttpClient {
    http_client: Client,
    config: Config,
    rate_limiter: RateLimiter,
    last_response: RwLock<Option<LastResponse>>,
}

impl HttpClient {
    /// Creates a transport for the given configuration
    pub fn new(config: Config) -> Result<Self, AppError> {
        let http_client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.rest_api.timeout))
            .build()?;
        let rate_limiter = RateLimiter::new(&config.rate_limiter);

        Ok(Self {
            http_client,
            config,
            rate_limiter,
            last_response: RwLock::new(None),
        })
    }

    /// Configuration the transport was built with
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Resolves an endpoint path or link to an absolute URL
    ///
    /// Absolute URLs are kept, paths starting with `/` are resolved against the
    /// site root (this is the shape of pagination links) and anything else is
    /// taken as relative to `{base_url}api/{version}/`.
    #[must_use]
    pub fn resolve_url(&self, path: &str) -> String {
        if path.starts_with("http") {
            path.to_string()
        } else if let Some(rooted) = path.strip_prefix('/') {
            format!("{}{}", self.config.rest_api.base_url, rooted)
        } else {
            format!("{}{}", self.config.api_version_url(), path)
        }
    }

    /// Parameters sent with every request: the token, then the configured defaults
    #[must_use]
    pub fn default_params(&self) -> QueryParams {
        let mut params = QueryParams::new().param(TOKEN_PARAM, &self.config.credentials.token);
        params.extend_from(&self.config.default_params);
        params
    }

    /// Builds the full request URL for `path` with `params` merged over the defaults
    ///
    /// Parameters are appended after any query already present in `path`.
    pub fn build_url(&self, path: &str, params: &QueryParams) -> Result<Url, AppError> {
        let mut url = Url::parse(&self.resolve_url(path)).map_err(|e| {
            error!(
                "Cannot build a url from '{}': {}",
                path.split('?').next().unwrap_or_default(),
                e
            );
            AppError::Url(e)
        })?;
        let mut merged = self.default_params();
        merged.extend_from(params);
        {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in merged.iter() {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }

    /// Makes a GET request and decodes the JSON body
    pub async fn get(&self, path: &str, params: &QueryParams) -> Result<Value, AppError> {
        self.request(Method::GET, path, params, None::<&()>).await
    }

    /// Makes a POST request with an optional JSON body and decodes the JSON answer
    pub async fn post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        params: &QueryParams,
        body: Option<&B>,
    ) -> Result<Value, AppError> {
        self.request(Method::POST, path, params, body).await
    }

    /// Makes a request and records the decoded body as the last response
    ///
    /// A GET for exactly the URL of the last GET response is answered from
    /// memory without touching the network.
    pub async fn request<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        params: &QueryParams,
        body: Option<&B>,
    ) -> Result<Value, AppError> {
        let url = self.build_url(path, params)?;

        if method == Method::GET {
            if let Some(cached) = self.cached_body(url.as_str()).await {
                debug!("Reusing last response for {}", url.path());
                return Ok(cached);
            }
        }

        let response = make_http_request(
            &self.http_client,
            &self.rate_limiter,
            method.clone(),
            url,
            body,
            &self.config.retry,
        )
        .await?;

        let final_url = response.url().to_string();
        let body = parse_response(response).await?;

        *self.last_response.write().await = Some(LastResponse {
            method,
            url: final_url,
            body: body.clone(),
        });
        Ok(body)
    }

    /// Follows a pagination link of the last response
    ///
    /// Returns `Ok(None)` when nothing was fetched yet or the last response has
    /// no link for `navigation`.
    pub async fn navigate(
        &self,
        navigation: Navigation,
        params: &QueryParams,
    ) -> Result<Option<Value>, AppError> {
        let link = {
            let last = self.last_response.read().await;
            match last.as_ref() {
                Some(last) => Links::from_body(&last.body)
                    .get(navigation)
                    .map(str::to_string),
                None => {
                    debug!("Cannot navigate to '{}': nothing fetched yet", navigation);
                    return Ok(None);
                }
            }
        };

        match link {
            Some(link) => self.get(&link, params).await.map(Some),
            None => {
                debug!("Last response has no '{}' link", navigation);
                Ok(None)
            }
        }
    }

    /// Clone of the last response, if any
    pub async fn last_response(&self) -> Option<LastResponse> {
        self.last_response.read().await.clone()
    }

    /// Forgets the last response
    pub async fn clear_last_response(&self) {
        *self.last_response.write().await = None;
    }

    async fn cached_body(&self, url: &str) -> Option<Value> {
        self.last_response
            .read()
            .await
            .as_ref()
            .filter(|last| last.method == Method::GET && last.url == url)
            .map(|last| last.body.clone())
    }
}

/// Sends one logical request, pacing it with the rate limiter and retrying
/// transient statuses
///
/// Statuses listed in [`crate::constants::RETRY_STATUSES`] are retried up to
/// `retry_config.max_retries()` times with exponential backoff. Any other
/// non-success status ends the call with [`AppError::Status`].
///
/// # Example
///
/// ```ignore
/// let url = Url::parse("https://trefle.io/api/v1/plants?token=abc")?;
/// let response = make_http_request(
///     &client,
///     &rate_limiter,
///     Method::GET,
///     url,
///     None::<&()>,
///     &RetryConfig::with_max_retries(3),
/// ).await?;
/// ```
pub async fn make_http_request<B: Serialize + ?Sized>(
    client: &Client,
    rate_limiter: &RateLimiter,
    method: Method,
    url: Url,
    body: Option<&B>,
    retry_config: &RetryConfig,
) -> Result<Response, AppError> {
    let mut retry_count = 0;
    let max_retries = retry_config.max_retries();

    loop {
        rate_limiter.wait().await;

        // the query holds the token, keep it out of the logs
        debug!("{} {}", method, url.path());

        let mut request = client
            .request(method.clone(), url.clone())
            .header(ACCEPT, "application/json");
        if let Some(b) = body {
            request = request.json(b);
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                let err = AppError::from(e);
                error!("{} {} failed: {}", method, url.path(), err);
                return Err(err);
            }
        };
        let status = response.status();
        debug!("Response status: {}", status);

        if status.is_success() {
            return Ok(response);
        }

        if RetryConfig::is_retryable(status) && retry_count < max_retries {
            retry_count += 1;
            let delay = retry_config.delay_for(retry_count);
            warn!(
                "{} {} returned {} (retry {} of {}), waiting {:?}",
                method,
                url.path(),
                status,
                retry_count,
                max_retries,
                delay
            );
            tokio::time::sleep(delay).await;
            continue;
        }

        let body = error_body(status, response.text().await);
        error!("Request failed with status {}: {}", status, body);
        return Err(AppError::Status { status, body });
    }
}

/// Body text of a failed response, or the read failure when it cannot be read
fn error_body(status: StatusCode, read: Result<String, reqwest::Error>) -> String {
    match read {
        Ok(body) => body,
        Err(e) => {
            let e = e.without_url();
            warn!("Could not read the body of a {} response: {}", status, e);
            format!("<unreadable body: {e}>")
        }
    }
}

/// Reads the body and decodes it as JSON
async fn parse_response(response: Response) -> Result<Value, AppError> {
    let text = response.text().await?;
    serde_json::from_str(&text).map_err(|e| {
        error!("Invalid JSON in response: {}", e);
        AppError::Json(e)
    })
}
