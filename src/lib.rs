/******************************************************************************
   Author: Trefle Client Contributors
   Date: 16/10/26
******************************************************************************/

//! # Trefle Client
//!
//! An async client for the [Trefle](https://trefle.io) plant data API.
//!
//! The client builds token-authenticated requests against the documented
//! endpoints, forwards query parameters (including the bracket-style
//! `filter[...]`, `order[...]` and `range[...]` keys), decodes the JSON
//! responses and keeps the pagination links of the last response so the
//! caller can walk through pages with `next`, `prev`, `first` and `last`.
//!
//! ## Example
//!
//! ```ignore
//! use trefle_client::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     setup_logger();
//!     let client = Client::new(Config::with_token("my-token"))?;
//!
//!     let plants = client
//!         .plants(None, QueryParams::new().filter("common_name", "beach strawberry"))
//!         .await?;
//!     info!("{}", plants["data"]);
//!
//!     if let Some(page) = client.next(QueryParams::new()).await? {
//!         info!("{}", page["links"]["self"]);
//!     }
//!     Ok(())
//! }
//! ```

/// Client facade, configuration and service traits
pub mod application;
/// Global constants
pub mod constants;
/// Error type used by every fallible operation
pub mod error;
/// Request, response and transport models
pub mod model;
/// Commonly used re-exports
pub mod prelude;
/// Environment and logging helpers
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
