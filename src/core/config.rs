use serde::{Deserialize, Serialize};
use crate::core::error::{Error, Result};

pub const DEFAULT_STOPWORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    pub cache_capacity: usize,              // Max cached search responses
    pub min_token_length: usize,            // Tokens shorter than this are dropped
    pub stopwords: Vec<String>,

    pub highlight_pre_tag: String,
    pub highlight_post_tag: String,
}

impl Default for IndexConfig {
    fn default() -> Self {
        IndexConfig {
            cache_capacity: 100,
            min_token_length: 3,
            stopwords: DEFAULT_STOPWORDS.iter().map(|w| w.to_string()).collect(),
            highlight_pre_tag: "<mark>".to_string(),
            highlight_post_tag: "</mark>".to_string(),
        }
    }
}

impl IndexConfig {
    pub fn validate(&self) -> Result<()> {
        if self.cache_capacity == 0 {
            return Err(Error::invalid_argument("cache_capacity must be greater than zero"));
        }
        if self.min_token_length == 0 {
            return Err(Error::invalid_argument("min_token_length must be greater than zero"));
        }
        Ok(())
    }
}
