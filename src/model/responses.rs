/******************************************************************************
   Author: Trefle Client Contributors
   Date: 16/10/26
******************************************************************************/
use crate::constants::CLAIM_EXPIRATION_FORMAT;
use crate::error::AppError;
use crate::model::requests::Navigation;
use chrono::NaiveDateTime;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Pagination links returned alongside list responses
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Links {
    /// Link to the current page or item
    #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
    pub self_link: Option<String>,
    /// Link to the first page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first: Option<String>,
    /// Link to the previous page, absent on the first page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev: Option<String>,
    /// Link to the next page, absent on the last page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    /// Link to the last page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last: Option<String>,
}

impl Links {
    /// Link for the given navigation direction, if the service supplied one
    #[must_use]
    pub fn get(&self, navigation: Navigation) -> Option<&str> {
        match navigation {
            Navigation::Next => self.next.as_deref(),
            Navigation::Prev => self.prev.as_deref(),
            Navigation::First => self.first.as_deref(),
            Navigation::Last => self.last.as_deref(),
        }
    }

    /// Reads the `links` object of a response body
    ///
    /// Bodies without links, or with links of an unexpected shape, yield
    /// empty links rather than an error.
    #[must_use]
    pub fn from_body(body: &Value) -> Self {
        body.get("links")
            .cloned()
            .and_then(|links| serde_json::from_value(links).ok())
            .unwrap_or_default()
    }
}

/// Typed view of the `{data, links, meta}` envelope
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResponseEnvelope {
    /// A list for collection endpoints, an object for single items
    #[serde(default)]
    pub data: Value,
    /// Pagination links
    #[serde(default)]
    pub links: Links,
    /// Metadata such as `total` and `last_modified`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Value>,
}

impl ResponseEnvelope {
    /// Decodes an envelope from a raw response body
    pub fn from_value(body: Value) -> Result<Self, AppError> {
        Ok(serde_json::from_value(body)?)
    }

    /// Total number of entries reported by `meta.total`
    #[must_use]
    pub fn total(&self) -> Option<u64> {
        self.meta.as_ref()?.get("total")?.as_u64()
    }
}

/// Client-side token returned by the auth claim endpoint
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthClaim {
    /// JWT bound to the requested origin
    pub token: String,
    /// Expiry as sent by the service, e.g. `08-13-2020 15:06`
    pub expiration: String,
}

impl AuthClaim {
    /// Parses `expiration`; `None` if the service changed its format
    #[must_use]
    pub fn expires_at(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(&self.expiration, CLAIM_EXPIRATION_FORMAT).ok()
    }
}
