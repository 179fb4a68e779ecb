/******************************************************************************
   Author: Trefle Client Contributors
   Date: 16/10/26
******************************************************************************/
/// HTTP transport with token handling, retry and the last-response slot
pub mod http;
/// Request models for API calls
pub mod requests;
/// Response models from API calls
pub mod responses;
/// Retry configuration for HTTP requests
pub mod retry;
