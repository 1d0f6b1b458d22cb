use std::collections::HashMap;
use crate::core::types::{DocId, Document};

/// A document together with what indexing it produced
#[derive(Debug, Clone)]
pub struct StoredDocument {
    pub document: Document,
    pub indexed_fields: Vec<String>,
    pub term_freqs: HashMap<String, u32>,  // Occurrences per term in the indexed text
    pub token_count: usize,                // Total tokens in the indexed text
}

impl StoredDocument {
    pub fn new(document: Document, indexed_fields: Vec<String>, tokens: &[String]) -> Self {
        let mut term_freqs: HashMap<String, u32> = HashMap::new();
        for token in tokens {
            *term_freqs.entry(token.clone()).or_insert(0) += 1;
        }

        StoredDocument {
            document,
            indexed_fields,
            term_freqs,
            token_count: tokens.len(),
        }
    }

    /// Occurrences of `term` divided by the document's token count
    pub fn term_frequency(&self, term: &str) -> f64 {
        if self.token_count == 0 {
            return 0.0;
        }
        let occurrences = self.term_freqs.get(term).copied().unwrap_or(0);
        occurrences as f64 / self.token_count as f64
    }

    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.term_freqs.keys().map(String::as_str)
    }
}

#[derive(Debug, Default)]
pub struct DocumentTable {
    docs: HashMap<DocId, StoredDocument>,
}

impl DocumentTable {
    pub fn new() -> Self {
        DocumentTable::default()
    }

    pub fn insert(&mut self, id: DocId, doc: StoredDocument) -> Option<StoredDocument> {
        self.docs.insert(id, doc)
    }

    pub fn remove(&mut self, id: &str) -> Option<StoredDocument> {
        self.docs.remove(id)
    }

    pub fn get(&self, id: &str) -> Option<&StoredDocument> {
        self.docs.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.docs.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    pub fn clear(&mut self) {
        self.docs.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_term_frequency() {
        let tokens: Vec<String> = ["comet", "comet", "tail", "dust"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let stored = StoredDocument::new(Document::new(), vec![], &tokens);
        assert_eq!(stored.term_frequency("comet"), 0.5);
        assert_eq!(stored.term_frequency("tail"), 0.25);
        assert_eq!(stored.term_frequency("nebula"), 0.0);
    }

    #[test]
    fn test_empty_document_has_zero_frequency() {
        let stored = StoredDocument::new(Document::new(), vec![], &[]);
        assert_eq!(stored.term_frequency("comet"), 0.0);
        assert_eq!(stored.terms().count(), 0);
    }
}
