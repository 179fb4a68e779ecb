/******************************************************************************
   Author: Trefle Client Contributors
   Date: 16/10/26
******************************************************************************/

//! Client facade for the Trefle API
//!
//! [`Client`] implements [`PlantService`] and [`NavigationService`] on top of
//! the token-authenticated [`HttpClient`].
//!
//! # Example
//! ```ignore
//! use trefle_client::prelude::*;
//!
//! let client = Client::new(Config::new())?;
//! let oaks = client
//!     .search("oak", SearchTarget::Plants, QueryParams::new().page(2))
//!     .await?;
//! let next = client.next(QueryParams::new()).await?;
//! ```

use crate::application::config::Config;
use crate::application::interfaces::navigation::NavigationService;
use crate::application::interfaces::plant::PlantService;
use crate::constants::AUTH_CLAIM_PATH;
use crate::error::AppError;
use crate::model::http::HttpClient;
use crate::model::requests::{
    Endpoint, Identifier, Navigation, PlantsBy, QueryParams, ReportRequest, SearchTarget,
};
use crate::model::responses::AuthClaim;
use async_trait::async_trait;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, error, info};

/// Trefle API client
///
/// Holds the token, the base URL and the last response. Cloning is cheap and
/// clones share the same last response.
#[derive(Clone)]
pub struct Client {
    http_client: Arc<HttpClient>,
}

impl Client {
    /// Creates a client for the given configuration
    pub fn new(config: Config) -> Result<Self, AppError> {
        let http_client = Arc::new(HttpClient::new(config)?);
        Ok(Self { http_client })
    }

    /// Creates a client with default settings and the given token
    pub fn with_token(token: impl Into<String>) -> Result<Self, AppError> {
        Self::new(Config::with_token(token))
    }

    /// Creates a client configured from the environment and `.env`
    pub fn from_env() -> Result<Self, AppError> {
        Self::new(Config::new())
    }

    /// Gets the underlying transport
    pub fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Body of the most recent response, if anything was fetched
    pub async fn last_response(&self) -> Option<Value> {
        self.http_client.last_response().await.map(|last| last.body)
    }
}

impl fmt::Display for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let config = self.http_client.config();
        write!(
            f,
            "An instance of the Trefle API client with token id: '{}', querying version: '{}'",
            config.credentials.token, config.rest_api.version
        )
    }
}

fn required(identifier: Identifier) -> Result<Identifier, AppError> {
    if identifier.is_empty() {
        error!("Empty identifier passed to an endpoint that requires one");
        return Err(AppError::InvalidInput(
            "an identifier is required for this endpoint".to_string(),
        ));
    }
    Ok(identifier)
}

#[async_trait]
impl PlantService for Client {
    async fn endpoint(
        &self,
        endpoint: Endpoint,
        identifier: Option<Identifier>,
        params: QueryParams,
    ) -> Result<Value, AppError> {
        let path = endpoint.path(identifier.as_ref());
        info!("Fetching {}", path);
        self.http_client.get(&path, &params).await
    }

    async fn search(
        &self,
        q: &str,
        what: SearchTarget,
        params: QueryParams,
    ) -> Result<Value, AppError> {
        let mut query = QueryParams::new().param("q", q);
        query.extend_from(&params);
        info!("Searching {} for '{}'", what, q);
        self.http_client.get(&format!("{what}/search"), &query).await
    }

    async fn report_error(
        &self,
        identifier: Identifier,
        notes: &str,
        what: SearchTarget,
    ) -> Result<Value, AppError> {
        let identifier = required(identifier)?;
        let path = format!("{what}/{identifier}/report");
        info!("Reporting an error on {}", path);
        self.http_client
            .post(&path, &QueryParams::new(), Some(&ReportRequest::new(notes)))
            .await
    }

    async fn plants_by(
        &self,
        modifier: PlantsBy,
        identifier: Identifier,
        params: QueryParams,
    ) -> Result<Value, AppError> {
        let identifier = required(identifier)?;
        let path = format!("{modifier}/{identifier}/plants");
        info!("Fetching {}", path);
        self.http_client.get(&path, &params).await
    }

    async fn corrections(
        &self,
        identifier: Option<Identifier>,
        params: QueryParams,
    ) -> Result<Value, AppError> {
        let path = match identifier.filter(|id| !id.is_empty()) {
            Some(id) => format!("corrections/{id}"),
            None => "corrections".to_string(),
        };
        info!("Fetching {}", path);
        self.http_client.get(&path, &params).await
    }

    async fn submit_correction(
        &self,
        species: Identifier,
        correction: &Value,
        params: QueryParams,
    ) -> Result<Value, AppError> {
        let species = required(species)?;
        let path = format!("corrections/species/{species}");
        info!("Submitting a correction to {}", path);
        self.http_client.post(&path, &params, Some(correction)).await
    }

    async fn auth_claim(&self, origin: &str, params: QueryParams) -> Result<AuthClaim, AppError> {
        let mut query = QueryParams::new().param("origin", origin);
        query.extend_from(&params);
        info!("Claiming a client token for {}", origin);
        let body = self
            .http_client
            .post(AUTH_CLAIM_PATH, &query, None::<&()>)
            .await?;
        let claim: AuthClaim = serde_json::from_value(body).map_err(|e| {
            error!("Unexpected auth claim response: {}", e);
            AppError::Json(e)
        })?;
        debug!("Client token expires at {}", claim.expiration);
        Ok(claim)
    }
}

#[async_trait]
impl NavigationService for Client {
    async fn navigate(
        &self,
        navigation: Navigation,
        params: QueryParams,
    ) -> Result<Option<Value>, AppError> {
        self.http_client.navigate(navigation, &params).await
    }
}
