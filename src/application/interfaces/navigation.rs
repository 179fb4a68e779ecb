/******************************************************************************
   Author: Trefle Client Contributors
   Date: 16/10/26
******************************************************************************/

use crate::error::AppError;
use crate::model::requests::{Navigation, QueryParams};
use async_trait::async_trait;
use serde_json::Value;

/// Interface for walking through paginated results
///
/// Links come from the last response fetched by the same client. Every method
/// yields `Ok(None)` when nothing was fetched yet or the link is missing, for
/// example `prev` on the first page or `next` on the last one.
#[async_trait]
pub trait NavigationService: Send + Sync {
    /// Follows the `navigation` link of the last response
    async fn navigate(
        &self,
        navigation: Navigation,
        params: QueryParams,
    ) -> Result<Option<Value>, AppError>;

    /// Fetches the next page
    async fn next(&self, params: QueryParams) -> Result<Option<Value>, AppError> {
        self.navigate(Navigation::Next, params).await
    }

    /// Fetches the previous page
    async fn prev(&self, params: QueryParams) -> Result<Option<Value>, AppError> {
        self.navigate(Navigation::Prev, params).await
    }

    /// Fetches the first page
    async fn first(&self, params: QueryParams) -> Result<Option<Value>, AppError> {
        self.navigate(Navigation::First, params).await
    }

    /// Fetches the last page
    async fn last(&self, params: QueryParams) -> Result<Option<Value>, AppError> {
        self.navigate(Navigation::Last, params).await
    }
}
