use std::collections::BTreeMap;
use tracing::trace;
use crate::analysis::analyzer::Analyzer;
use crate::core::types::DocId;
use crate::index::documents::{DocumentTable, StoredDocument};
use crate::index::inverted::InvertedIndex;
use crate::query::types::SearchOptions;
use crate::scoring::scorer::RelevanceScorer;
use crate::search::highlight::Highlighter;
use crate::search::results::{Highlight, SearchHit, SearchResponse};

/// Runs one query against a borrowed view of an index
pub struct QueryExecutor<'a> {
    pub index: &'a InvertedIndex,
    pub documents: &'a DocumentTable,
    pub analyzer: &'a Analyzer,
    pub highlighter: &'a Highlighter,
    pub scorer: RelevanceScorer,
}

impl<'a> QueryExecutor<'a> {
    pub fn new(
        index: &'a InvertedIndex,
        documents: &'a DocumentTable,
        analyzer: &'a Analyzer,
        highlighter: &'a Highlighter,
    ) -> Self {
        QueryExecutor {
            index,
            documents,
            analyzer,
            highlighter,
            scorer: RelevanceScorer::default(),
        }
    }

    pub fn execute(&self, query: &str, options: &SearchOptions) -> SearchResponse {
        let terms = self.analyzer.analyze(query);
        if terms.is_empty() {
            return SearchResponse::empty(query, options.clone());
        }

        let token_scores = self.token_scores(&terms, options);
        let total_docs = self.documents.len();

        let mut hits: Vec<SearchHit> = token_scores
            .into_iter()
            .filter_map(|(id, token_score)| {
                let stored = self.documents.get(id.as_str())?;
                if !Self::passes_filters(stored, options) {
                    return None;
                }

                let components = self.scorer.components(
                    token_score,
                    stored,
                    &terms,
                    self.index,
                    total_docs,
                    &options.boost,
                );
                Some(SearchHit {
                    id: id.clone(),
                    score: self.scorer.combine(components),
                    document: stored.document.clone(),
                    highlights: Vec::new(),
                })
            })
            .collect();

        hits.sort_by(SearchHit::rank_cmp);

        let total = hits.len();
        let has_more = options.offset.saturating_add(options.limit) < total;

        let results: Vec<SearchHit> = hits
            .into_iter()
            .skip(options.offset)
            .take(options.limit)
            .map(|mut hit| {
                hit.highlights = self.highlight(&hit, &terms, options);
                hit
            })
            .collect();

        trace!(query, total, returned = results.len(), "query executed");

        SearchResponse {
            results,
            total,
            has_more,
            query: query.to_string(),
            options: options.clone(),
        }
    }

    /// Exact matches score 1.0 per query term; fuzzy matches score 1 / (distance + 1)
    fn token_scores(&self, terms: &[String], options: &SearchOptions) -> BTreeMap<&'a DocId, f64> {
        let mut scores: BTreeMap<&'a DocId, f64> = BTreeMap::new();

        for term in terms {
            if let Some(list) = self.index.search_term(term) {
                for id in list.iter() {
                    *scores.entry(id).or_insert(0.0) += 1.0;
                }
            }

            if options.fuzzy {
                for (_, list, distance) in self.index.fuzzy_search(term, options.max_distance) {
                    let weight = 1.0 / (distance as f64 + 1.0);
                    for id in list.iter() {
                        *scores.entry(id).or_insert(0.0) += weight;
                    }
                }
            }
        }

        scores
    }

    fn passes_filters(stored: &StoredDocument, options: &SearchOptions) -> bool {
        options
            .filters
            .iter()
            .all(|(field, filter)| filter.matches(stored.document.get_field(field)))
    }

    fn highlight(&self, hit: &SearchHit, terms: &[String], options: &SearchOptions) -> Vec<Highlight> {
        let fields: &[String] = match &options.highlight_fields {
            Some(fields) => fields.as_slice(),
            None => match self.documents.get(hit.id.as_str()) {
                Some(stored) => stored.indexed_fields.as_slice(),
                None => &[],
            },
        };
        self.highlighter.highlight(&hit.document, fields, terms)
    }
}
