/******************************************************************************
   Author: Trefle Client Contributors
   Date: 16/10/26
******************************************************************************/

//! Request-side models: resources, selectors, identifiers and query parameters

use crate::error::AppError;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::error;

/// Resource families exposed by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Endpoint {
    /// `/kingdoms`
    Kingdoms,
    /// `/subkingdoms`
    Subkingdoms,
    /// `/divisions`
    Divisions,
    /// `/division_classes`
    DivisionClasses,
    /// `/division_orders`
    DivisionOrders,
    /// `/families`
    Families,
    /// `/genus`
    Genus,
    /// `/plants`
    Plants,
    /// `/species`
    Species,
    /// `/distributions`
    Distributions,
}

impl Endpoint {
    /// Every resource, in the order the API documents them
    pub const ALL: [Endpoint; 10] = [
        Endpoint::Kingdoms,
        Endpoint::Subkingdoms,
        Endpoint::Divisions,
        Endpoint::DivisionClasses,
        Endpoint::DivisionOrders,
        Endpoint::Families,
        Endpoint::Genus,
        Endpoint::Plants,
        Endpoint::Species,
        Endpoint::Distributions,
    ];

    /// Path segment of the resource
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Endpoint::Kingdoms => "kingdoms",
            Endpoint::Subkingdoms => "subkingdoms",
            Endpoint::Divisions => "divisions",
            Endpoint::DivisionClasses => "division_classes",
            Endpoint::DivisionOrders => "division_orders",
            Endpoint::Families => "families",
            Endpoint::Genus => "genus",
            Endpoint::Plants => "plants",
            Endpoint::Species => "species",
            Endpoint::Distributions => "distributions",
        }
    }

    /// Relative path of the collection, or of one item when `identifier` is set
    #[must_use]
    pub fn path(&self, identifier: Option<&Identifier>) -> String {
        match identifier.filter(|id| !id.is_empty()) {
            Some(id) => format!("{}/{}", self.as_str(), id),
            None => self.as_str().to_string(),
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Endpoint {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Endpoint::ALL
            .iter()
            .find(|endpoint| endpoint.as_str() == s)
            .copied()
            .ok_or_else(|| {
                error!("Unknown endpoint '{}'", s);
                AppError::InvalidInput(format!("unknown endpoint '{s}'"))
            })
    }
}

/// Resource family targeted by search and error reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchTarget {
    /// Search or report on plants
    #[default]
    Plants,
    /// Search or report on species
    Species,
}

impl SearchTarget {
    /// Path segment of the target
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchTarget::Plants => "plants",
            SearchTarget::Species => "species",
        }
    }
}

impl fmt::Display for SearchTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchTarget {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "plants" => Ok(SearchTarget::Plants),
            "species" => Ok(SearchTarget::Species),
            _ => Err(AppError::invalid_argument("what", &["plants", "species"])),
        }
    }
}

/// Lookup used to list the plants of a distribution zone or a genus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlantsBy {
    /// `/distributions/{id}/plants`
    Distributions,
    /// `/genus/{id}/plants`
    Genus,
}

impl PlantsBy {
    /// Path segment of the lookup
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            PlantsBy::Distributions => "distributions",
            PlantsBy::Genus => "genus",
        }
    }
}

impl fmt::Display for PlantsBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlantsBy {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "distributions" => Ok(PlantsBy::Distributions),
            "genus" => Ok(PlantsBy::Genus),
            _ => Err(AppError::invalid_argument(
                "modifier",
                &["distributions", "genus"],
            )),
        }
    }
}

/// Pagination link to follow from the last response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Navigation {
    /// Following page
    Next,
    /// Previous page
    Prev,
    /// First page
    First,
    /// Last page
    Last,
}

impl Navigation {
    /// Every navigation direction
    pub const ALL: [Navigation; 4] = [
        Navigation::Next,
        Navigation::Prev,
        Navigation::First,
        Navigation::Last,
    ];

    /// Key of the link inside the `links` object
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Navigation::Next => "next",
            Navigation::Prev => "prev",
            Navigation::First => "first",
            Navigation::Last => "last",
        }
    }
}

impl fmt::Display for Navigation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Navigation {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Navigation::ALL
            .iter()
            .find(|nav| nav.as_str() == s)
            .copied()
            .ok_or_else(|| AppError::invalid_argument("navigation", &["next", "prev", "first", "last"]))
    }
}

/// Primary key or slug of a single item
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Identifier {
    /// Numeric primary key
    Id(u64),
    /// Slug, e.g. `quercus-rotundifolia`
    Slug(String),
}

impl Identifier {
    /// An id of `0` or an empty slug does not address an item
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Identifier::Id(id) => *id == 0,
            Identifier::Slug(slug) => slug.is_empty(),
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Id(id) => write!(f, "{id}"),
            Identifier::Slug(slug) => f.write_str(slug),
        }
    }
}

impl From<u64> for Identifier {
    fn from(id: u64) -> Self {
        Identifier::Id(id)
    }
}

impl From<u32> for Identifier {
    fn from(id: u32) -> Self {
        Identifier::Id(u64::from(id))
    }
}

impl From<&str> for Identifier {
    fn from(slug: &str) -> Self {
        Identifier::Slug(slug.to_string())
    }
}

impl From<String> for Identifier {
    fn from(slug: String) -> Self {
        Identifier::Slug(slug)
    }
}

impl From<&String> for Identifier {
    fn from(slug: &String) -> Self {
        Identifier::Slug(slug.clone())
    }
}

/// Sort direction for `order[...]` parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Ascending
    Asc,
    /// Descending
    Desc,
}

impl SortOrder {
    /// Value sent in the query string
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// Ordered query string parameters
///
/// Keys are sent exactly as given, so the bracket syntax used by the API for
/// filters, sorting and ranges (`filter[common_name]`, `order[year]`) passes
/// through untouched. Setting a key that is already present replaces its value
/// in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    /// Creates an empty parameter list
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key` to `value`, replacing an existing value for the same key
    pub fn insert(&mut self, key: impl Into<String>, value: impl ToString) {
        let key = key.into();
        let value = value.to_string();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.0.push((key, value)),
        }
    }

    /// Builder form of [`QueryParams::insert`]
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.insert(key, value);
        self
    }

    /// Adds `filter[field]=value`
    #[must_use]
    pub fn filter(self, field: &str, value: impl ToString) -> Self {
        self.param(format!("filter[{field}]"), value)
    }

    /// Adds `filter_not[field]=value`
    #[must_use]
    pub fn filter_not(self, field: &str, value: impl ToString) -> Self {
        self.param(format!("filter_not[{field}]"), value)
    }

    /// Adds `order[field]=asc|desc`
    #[must_use]
    pub fn order(self, field: &str, order: SortOrder) -> Self {
        self.param(format!("order[{field}]"), order.as_str())
    }

    /// Adds `range[field]=min,max`; either bound may be left open
    #[must_use]
    pub fn range(self, field: &str, min: Option<i64>, max: Option<i64>) -> Self {
        let bound = |b: Option<i64>| b.map(|v| v.to_string()).unwrap_or_default();
        self.param(format!("range[{field}]"), format!("{},{}", bound(min), bound(max)))
    }

    /// Adds `page=n`
    #[must_use]
    pub fn page(self, page: u32) -> Self {
        self.param("page", page)
    }

    /// Value for `key`, if set
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Applies every parameter of `other` on top of this list
    pub fn extend_from(&mut self, other: &QueryParams) {
        for (key, value) in other.iter() {
            self.insert(key, value);
        }
    }

    /// Iterates over `(key, value)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of parameters
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no parameter is set
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for QueryParams
where
    K: Into<String>,
    V: ToString,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = QueryParams::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}

/// Body of an error report
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportRequest {
    /// Free text describing what is wrong with the entry
    pub notes: String,
}

impl ReportRequest {
    /// Creates a report with the given notes
    pub fn new(notes: impl Into<String>) -> Self {
        Self {
            notes: notes.into(),
        }
    }
}
