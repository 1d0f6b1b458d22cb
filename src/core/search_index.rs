use std::num::NonZeroUsize;
use std::sync::OnceLock;
use tracing::{debug, trace, warn};
use crate::analysis::analyzer::Analyzer;
use crate::core::config::IndexConfig;
use crate::core::error::Result;
use crate::core::stats::IndexStats;
use crate::core::types::{DocId, Document, DocumentEntry};
use crate::index::documents::{DocumentTable, StoredDocument};
use crate::index::inverted::InvertedIndex;
use crate::query::cache::QueryCache;
use crate::query::types::{cache_key, SearchOptions};
use crate::search::executor::QueryExecutor;
use crate::search::highlight::Highlighter;
use crate::search::prefix::PrefixIndex;
use crate::search::results::SearchResponse;

/// An in-memory full-text index with a result cache.
///
/// Mutations take `&mut self` and clear the whole cache. Reads take `&self`,
/// so a host can share one instance behind a reader-writer lock.
pub struct SearchIndex {
    config: IndexConfig,
    analyzer: Analyzer,
    highlighter: Highlighter,

    index: InvertedIndex,
    documents: DocumentTable,

    cache: QueryCache,
    prefix_index: OnceLock<PrefixIndex>,  // Rebuilt lazily after mutations
}

impl Default for SearchIndex {
    fn default() -> Self {
        SearchIndex::from_valid_config(IndexConfig::default())
    }
}

impl SearchIndex {
    pub fn new() -> Self {
        SearchIndex::default()
    }

    pub fn with_config(config: IndexConfig) -> Result<Self> {
        config.validate()?;
        Ok(SearchIndex::from_valid_config(config))
    }

    fn from_valid_config(config: IndexConfig) -> Self {
        let capacity = NonZeroUsize::new(config.cache_capacity).unwrap_or(NonZeroUsize::MIN);

        SearchIndex {
            analyzer: Analyzer::from_config(&config),
            highlighter: Highlighter::from_config(&config),
            index: InvertedIndex::new(),
            documents: DocumentTable::new(),
            cache: QueryCache::new(capacity),
            prefix_index: OnceLock::new(),
            config,
        }
    }

    pub fn config(&self) -> &IndexConfig {
        &self.config
    }

    /// Indexes the named fields of `document` under `id`.
    ///
    /// An existing document with the same id is removed first, so its old
    /// terms no longer point at `id`. Missing fields contribute nothing.
    pub fn add_document<S: AsRef<str>>(&mut self, id: impl Into<DocId>, document: Document, fields: &[S]) {
        let id = id.into();
        if self.documents.contains(id.as_str()) {
            debug!(%id, "re-indexing existing document");
            self.prune(&id);
        }

        let fields: Vec<String> = fields.iter().map(|f| f.as_ref().to_string()).collect();
        let tokens = self.analyzer.analyze(&document.text_of(&fields));
        let stored = StoredDocument::new(document, fields, &tokens);

        self.index.add_document(&id, stored.terms());
        debug!(%id, tokens = tokens.len(), terms = stored.term_freqs.len(), "document indexed");
        self.documents.insert(id, stored);

        self.invalidate();
    }

    pub fn add_documents<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = DocumentEntry>,
    {
        for entry in entries {
            self.add_document(entry.id, entry.document, entry.fields.as_slice());
        }
    }

    /// Returns false when no document has this id.
    pub fn remove_document(&mut self, id: &str) -> bool {
        let Some(stored) = self.documents.remove(id) else {
            return false;
        };

        let id = DocId::from(id);
        self.index.remove_document(&id, stored.terms());
        debug!(%id, "document removed");

        self.invalidate();
        true
    }

    fn prune(&mut self, id: &DocId) {
        if let Some(stored) = self.documents.remove(id.as_str()) {
            self.index.remove_document(id, stored.terms());
        }
    }

    pub fn search(&self, query: &str, options: &SearchOptions) -> SearchResponse {
        let key = match cache_key(query, options) {
            Ok(key) => Some(key),
            Err(err) => {
                warn!(%err, "search response will not be cached");
                None
            }
        };

        if let Some(cached) = key.as_deref().and_then(|key| self.cache.get(key)) {
            trace!(query, "cache hit");
            return cached;
        }

        let response =
            QueryExecutor::new(&self.index, &self.documents, &self.analyzer, &self.highlighter)
                .execute(query, options);

        if let Some(key) = key {
            self.cache.put(key, response.clone());
        }
        response
    }

    /// Up to `limit` indexed terms starting with `prefix`, sorted.
    pub fn get_suggestions(&self, prefix: &str, limit: usize) -> Vec<String> {
        let prefix = prefix.to_lowercase();
        self.prefix_index
            .get_or_init(|| self.build_prefix_index())
            .search_prefix(&prefix, limit)
    }

    fn build_prefix_index(&self) -> PrefixIndex {
        PrefixIndex::build(self.index.term_doc_freqs()).unwrap_or_else(|err| {
            warn!(%err, "failed to build prefix index, suggestions disabled");
            PrefixIndex::default()
        })
    }

    pub fn get_stats(&self) -> IndexStats {
        let cache = self.cache.stats();
        IndexStats {
            total_documents: self.documents.len(),
            total_terms: self.index.term_count(),
            cache_size: cache.size,
            avg_terms_per_document: IndexStats::average_terms(
                self.index.total_postings(),
                self.documents.len(),
            ),
            cache,
        }
    }

    pub fn get_document(&self, id: &str) -> Option<&Document> {
        self.documents.get(id).map(|stored| &stored.document)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.documents.contains(id)
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn clear(&mut self) {
        self.documents.clear();
        self.index.clear();
        self.invalidate();
        debug!("index cleared");
    }

    fn invalidate(&mut self) {
        self.cache.clear();
        self.prefix_index.take();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(name: &str, description: &str) -> Document {
        Document::new()
            .with_field("name", name)
            .with_field("description", description)
    }

    #[test]
    fn test_reindex_replaces_old_terms() {
        let mut index = SearchIndex::new();
        index.add_document("1", doc("Comet Tutorial", "Learn Comet"), &["name", "description"]);
        index.add_document("1", doc("Nebula Guide", "Learn Nebula"), &["name", "description"]);

        assert_eq!(index.len(), 1);
        assert_eq!(index.search("comet", &SearchOptions::default()).total, 0);
        assert_eq!(index.search("nebula", &SearchOptions::default()).total, 1);
        assert!(index.get_suggestions("com", 10).is_empty());
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut index = SearchIndex::new();
        index.add_document("1", doc("Comet", "tail"), &["name"]);
        let before = index.get_stats();
        assert!(!index.remove_document("nope"));
        assert_eq!(index.get_stats().total_terms, before.total_terms);
    }

    #[test]
    fn test_mutation_clears_cache() {
        let mut index = SearchIndex::new();
        index.add_document("1", doc("Comet", "tail"), &["name"]);
        index.search("comet", &SearchOptions::default());
        assert_eq!(index.get_stats().cache_size, 1);

        index.add_document("2", doc("Nebula", "cloud"), &["name"]);
        assert_eq!(index.get_stats().cache_size, 0);

        index.search("comet", &SearchOptions::default());
        index.remove_document("2");
        assert_eq!(index.get_stats().cache_size, 0);
    }

    #[test]
    fn test_suggestions_refresh_after_mutation() {
        let mut index = SearchIndex::new();
        index.add_document("1", doc("Comet", ""), &["name"]);
        assert_eq!(index.get_suggestions("CO", 5), vec!["comet"]);

        index.add_document("2", doc("Cosmic rays", ""), &["name"]);
        assert_eq!(index.get_suggestions("co", 5), vec!["comet", "cosmic"]);
        assert_eq!(index.get_suggestions("co", 1), vec!["comet"]);
    }

    #[test]
    fn test_stats() {
        let mut index = SearchIndex::new();
        assert_eq!(index.get_stats().avg_terms_per_document, 0.0);

        index.add_document("1", doc("Comet Tutorial", "Learn Comet"), &["name", "description"]);
        index.add_document("2", doc("Nebula Guide", "Learn Nebula programming"), &["name", "description"]);

        let stats = index.get_stats();
        assert_eq!(stats.total_documents, 2);
        // comet tutorial learn | nebula guide learn programming
        assert_eq!(stats.total_terms, 6);
        assert_eq!(stats.avg_terms_per_document, 3.5);
    }

    #[test]
    fn test_clear() {
        let mut index = SearchIndex::new();
        index.add_document("1", doc("Comet", ""), &["name"]);
        index.search("comet", &SearchOptions::default());
        index.clear();

        let stats = index.get_stats();
        assert_eq!(stats.total_documents, 0);
        assert_eq!(stats.total_terms, 0);
        assert_eq!(stats.cache_size, 0);
        assert!(index.is_empty());
    }

    #[test]
    fn test_invalid_config() {
        let config = IndexConfig { cache_capacity: 0, ..IndexConfig::default() };
        assert!(SearchIndex::with_config(config).is_err());
    }
}
