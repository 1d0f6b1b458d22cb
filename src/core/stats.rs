use serde::{Serialize, Deserialize};
use crate::query::cache::CacheStats;

/// Index statistics for monitoring
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexStats {
    pub total_documents: usize,
    pub total_terms: usize,              // Distinct indexed terms
    pub cache_size: usize,
    pub avg_terms_per_document: f64,     // Postings per document, two decimals

    pub cache: CacheStats,
}

impl IndexStats {
    pub fn average_terms(total_postings: usize, total_documents: usize) -> f64 {
        if total_documents == 0 {
            return 0.0;
        }
        let avg = total_postings as f64 / total_documents as f64;
        (avg * 100.0).round() / 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average_terms_rounds_to_two_decimals() {
        assert_eq!(IndexStats::average_terms(10, 3), 3.33);
        assert_eq!(IndexStats::average_terms(5, 2), 2.5);
        assert_eq!(IndexStats::average_terms(7, 0), 0.0);
    }
}
