use std::collections::BTreeMap;
use crate::core::types::Document;
use crate::index::documents::StoredDocument;
use crate::index::inverted::InvertedIndex;

/// Fixed blend of match count, TF-IDF and field boosts
#[derive(Debug, Clone, Copy)]
pub struct RelevanceScorer {
    pub token_weight: f64,
    pub tfidf_weight: f64,
    pub boost_weight: f64,
}

impl Default for RelevanceScorer {
    fn default() -> Self {
        RelevanceScorer {
            token_weight: 0.4,
            tfidf_weight: 0.4,
            boost_weight: 0.2,
        }
    }
}

/// Inputs to the final score of one candidate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreComponents {
    pub token_score: f64,
    pub tfidf: f64,
    pub boost: f64,
}

impl RelevanceScorer {
    pub fn combine(&self, components: ScoreComponents) -> f64 {
        self.token_weight * components.token_score
            + self.tfidf_weight * components.tfidf
            + self.boost_weight * components.boost
    }

    pub fn components(
        &self,
        token_score: f64,
        stored: &StoredDocument,
        query_terms: &[String],
        index: &InvertedIndex,
        total_docs: usize,
        boost: &BTreeMap<String, f64>,
    ) -> ScoreComponents {
        ScoreComponents {
            token_score,
            tfidf: tf_idf(stored, query_terms, index, total_docs),
            boost: field_boost(&stored.document, boost),
        }
    }
}

/// IDF = ln((N + 1) / (df + 1))
pub fn idf(total_docs: usize, doc_freq: u32) -> f64 {
    ((total_docs as f64 + 1.0) / (doc_freq as f64 + 1.0)).ln()
}

/// Sum over query terms of normalized term frequency times IDF
pub fn tf_idf(stored: &StoredDocument, query_terms: &[String], index: &InvertedIndex, total_docs: usize) -> f64 {
    query_terms
        .iter()
        .map(|term| stored.term_frequency(term) * idf(total_docs, index.doc_freq(term)))
        .sum()
}

/// Product of the multipliers of every boosted field the document has a value for
pub fn field_boost(document: &Document, boost: &BTreeMap<String, f64>) -> f64 {
    boost
        .iter()
        .filter(|(field, _)| document.get_field(field).is_some_and(|value| !value.is_empty()))
        .map(|(_, multiplier)| *multiplier)
        .product()
}
