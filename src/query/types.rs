use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};
use crate::core::error::Result;
use crate::core::types::FieldValue;

/// Filter on a stored field value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    Exact(String),
    OneOf(Vec<String>),
}

impl FilterValue {
    fn accepts(&self, value: &str) -> bool {
        match self {
            FilterValue::Exact(expected) => expected == value,
            FilterValue::OneOf(allowed) => allowed.iter().any(|a| a == value),
        }
    }

    /// List-valued fields match when any element does.
    pub fn matches(&self, value: Option<&FieldValue>) -> bool {
        match value {
            None => false,
            Some(FieldValue::Text(text)) => self.accepts(text),
            Some(FieldValue::List(items)) => items.iter().any(|item| self.accepts(item)),
        }
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        FilterValue::Exact(value.to_string())
    }
}

impl From<Vec<&str>> for FilterValue {
    fn from(values: Vec<&str>) -> Self {
        FilterValue::OneOf(values.into_iter().map(String::from).collect())
    }
}

/// Search options; maps are ordered so the serialized form is canonical
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    pub fuzzy: bool,
    pub max_distance: usize,   // Only used when `fuzzy` is set
    pub limit: usize,
    pub offset: usize,
    pub boost: BTreeMap<String, f64>,
    pub filters: BTreeMap<String, FilterValue>,
    pub highlight_fields: Option<Vec<String>>,  // Defaults to the indexed fields
}

impl Default for SearchOptions {
    fn default() -> Self {
        SearchOptions {
            fuzzy: false,
            max_distance: 2,
            limit: 10,
            offset: 0,
            boost: BTreeMap::new(),
            filters: BTreeMap::new(),
            highlight_fields: None,
        }
    }
}

impl SearchOptions {
    pub fn new() -> Self {
        SearchOptions::default()
    }

    pub fn fuzzy(mut self, max_distance: usize) -> Self {
        self.fuzzy = true;
        self.max_distance = max_distance;
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    pub fn boost(mut self, field: &str, multiplier: f64) -> Self {
        self.boost.insert(field.to_string(), multiplier);
        self
    }

    pub fn filter(mut self, field: &str, value: impl Into<FilterValue>) -> Self {
        self.filters.insert(field.to_string(), value.into());
        self
    }

    pub fn highlight_fields(mut self, fields: &[&str]) -> Self {
        self.highlight_fields = Some(fields.iter().map(|f| f.to_string()).collect());
        self
    }
}

#[derive(Serialize)]
struct CacheKeyParts<'a> {
    query: &'a str,
    options: &'a SearchOptions,
}

/// Canonical cache key for a query and its options
pub fn cache_key(query: &str, options: &SearchOptions) -> Result<String> {
    Ok(serde_json::to_string(&CacheKeyParts { query, options })?)
}
