use std::cmp::Ordering;
use serde::{Deserialize, Serialize};
use crate::core::types::{DocId, Document};
use crate::query::types::SearchOptions;

/// Annotated text of one field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Highlight {
    pub field: String,
    pub text: String,
}

/// Document with relevance score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    pub id: DocId,
    pub score: f64,
    pub document: Document,
    pub highlights: Vec<Highlight>,
}

impl SearchHit {
    /// Higher score first, then ascending id
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        other
            .score
            .total_cmp(&self.score)
            .then_with(|| self.id.cmp(&other.id))
    }
}

/// One page of results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<SearchHit>,
    pub total: usize,      // Matches before pagination
    pub has_more: bool,
    pub query: String,
    pub options: SearchOptions,
}

impl SearchResponse {
    pub fn empty(query: &str, options: SearchOptions) -> Self {
        SearchResponse {
            results: Vec::new(),
            total: 0,
            has_more: false,
            query: query.to_string(),
            options,
        }
    }

    pub fn ids(&self) -> Vec<&str> {
        self.results.iter().map(|hit| hit.id.as_str()).collect()
    }
}
