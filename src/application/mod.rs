/******************************************************************************
   Author: Trefle Client Contributors
   Date: 16/10/26
******************************************************************************/

/// Client facade implementing the service interfaces
pub mod client;
/// Client configuration
pub mod config;
/// Service interfaces
pub mod interfaces;
/// Request pacing
pub mod rate_limiter;
