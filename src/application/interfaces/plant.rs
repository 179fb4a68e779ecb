/******************************************************************************
   Author: Trefle Client Contributors
   Date: 16/10/26
******************************************************************************/

use crate::error::AppError;
use crate::model::requests::{Endpoint, Identifier, PlantsBy, QueryParams, SearchTarget};
use crate::model::responses::AuthClaim;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the plant data service
///
/// Responses are returned as decoded JSON, usually a `{data, links, meta}`
/// envelope; see [`crate::model::responses::ResponseEnvelope`] for a typed view.
#[async_trait]
pub trait PlantService: Send + Sync {
    /// Lists a resource, or fetches one item of it when `identifier` is set
    async fn endpoint(
        &self,
        endpoint: Endpoint,
        identifier: Option<Identifier>,
        params: QueryParams,
    ) -> Result<Value, AppError>;

    /// Searches plants or species matching `q`
    async fn search(
        &self,
        q: &str,
        what: SearchTarget,
        params: QueryParams,
    ) -> Result<Value, AppError>;

    /// Reports an error on a plant or species entry
    ///
    /// # Arguments
    /// * `identifier` - Primary key or slug of the entry
    /// * `notes` - Description of what is wrong
    /// * `what` - Whether the entry is a plant or a species
    async fn report_error(
        &self,
        identifier: Identifier,
        notes: &str,
        what: SearchTarget,
    ) -> Result<Value, AppError>;

    /// Lists the plants of a distribution zone or a genus
    async fn plants_by(
        &self,
        modifier: PlantsBy,
        identifier: Identifier,
        params: QueryParams,
    ) -> Result<Value, AppError>;

    /// Lists corrections, or fetches one when `identifier` is set
    async fn corrections(
        &self,
        identifier: Option<Identifier>,
        params: QueryParams,
    ) -> Result<Value, AppError>;

    /// Submits a correction for a species
    ///
    /// `correction` is sent verbatim as the JSON body, for example
    /// `{"notes": "...", "source_type": "external", "correction_change": {...}}`.
    async fn submit_correction(
        &self,
        species: Identifier,
        correction: &Value,
        params: QueryParams,
    ) -> Result<Value, AppError>;

    /// Claims a client-side token bound to `origin`
    ///
    /// The returned expiry has to be tracked by the caller.
    async fn auth_claim(&self, origin: &str, params: QueryParams) -> Result<AuthClaim, AppError>;

    /// `/kingdoms[/{id}]`
    async fn kingdoms(
        &self,
        identifier: Option<Identifier>,
        params: QueryParams,
    ) -> Result<Value, AppError> {
        self.endpoint(Endpoint::Kingdoms, identifier, params).await
    }

    /// `/subkingdoms[/{id}]`
    async fn subkingdoms(
        &self,
        identifier: Option<Identifier>,
        params: QueryParams,
    ) -> Result<Value, AppError> {
        self.endpoint(Endpoint::Subkingdoms, identifier, params).await
    }

    /// `/divisions[/{id}]`
    async fn divisions(
        &self,
        identifier: Option<Identifier>,
        params: QueryParams,
    ) -> Result<Value, AppError> {
        self.endpoint(Endpoint::Divisions, identifier, params).await
    }

    /// `/division_classes[/{id}]`
    async fn division_classes(
        &self,
        identifier: Option<Identifier>,
        params: QueryParams,
    ) -> Result<Value, AppError> {
        self.endpoint(Endpoint::DivisionClasses, identifier, params).await
    }

    /// `/division_orders[/{id}]`
    async fn division_orders(
        &self,
        identifier: Option<Identifier>,
        params: QueryParams,
    ) -> Result<Value, AppError> {
        self.endpoint(Endpoint::DivisionOrders, identifier, params).await
    }

    /// `/families[/{id}]`
    async fn families(
        &self,
        identifier: Option<Identifier>,
        params: QueryParams,
    ) -> Result<Value, AppError> {
        self.endpoint(Endpoint::Families, identifier, params).await
    }

    /// `/genus[/{id}]`
    async fn genus(
        &self,
        identifier: Option<Identifier>,
        params: QueryParams,
    ) -> Result<Value, AppError> {
        self.endpoint(Endpoint::Genus, identifier, params).await
    }

    /// `/plants[/{id}]`
    async fn plants(
        &self,
        identifier: Option<Identifier>,
        params: QueryParams,
    ) -> Result<Value, AppError> {
        self.endpoint(Endpoint::Plants, identifier, params).await
    }

    /// `/species[/{id}]`
    async fn species(
        &self,
        identifier: Option<Identifier>,
        params: QueryParams,
    ) -> Result<Value, AppError> {
        self.endpoint(Endpoint::Species, identifier, params).await
    }

    /// `/distributions[/{id}]`
    async fn distributions(
        &self,
        identifier: Option<Identifier>,
        params: QueryParams,
    ) -> Result<Value, AppError> {
        self.endpoint(Endpoint::Distributions, identifier, params).await
    }
}
