/******************************************************************************
   Author: Trefle Client Contributors
   Date: 16/10/26
******************************************************************************/

//! # Trefle Client Prelude
//!
//! Brings the client, its service traits and the request/response models into
//! scope with a single import.
//!
//! ```rust
//! use trefle_client::prelude::*;
//!
//! let params = QueryParams::new()
//!     .filter("common_name", "blackwood")
//!     .order("year", SortOrder::Desc);
//! assert_eq!(params.get("filter[common_name]"), Some("blackwood"));
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the Trefle API client
pub use crate::application::config::{Config, Credentials, RateLimiterConfig, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::{AppError, TrefleResult};

// ============================================================================
// CLIENT AND SERVICES
// ============================================================================

/// Client facade
pub use crate::application::client::Client;

/// Service traits
pub use crate::application::interfaces::navigation::NavigationService;
pub use crate::application::interfaces::plant::PlantService;

/// Transport
pub use crate::model::http::{HttpClient, LastResponse};
pub use crate::model::retry::RetryConfig;

// ============================================================================
// MODELS
// ============================================================================

pub use crate::model::requests::{
    Endpoint, Identifier, Navigation, PlantsBy, QueryParams, ReportRequest, SearchTarget,
    SortOrder,
};
pub use crate::model::responses::{AuthClaim, Links, ResponseEnvelope};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

pub use async_trait::async_trait;
pub use serde_json::{Value, json};
pub use tracing::{debug, error, info, warn};
