use std::collections::BTreeMap;
use crate::core::types::DocId;
use crate::index::posting::PostingList;
use crate::search::fuzzy::FuzzyAutomaton;

/// Inverted index structure: term → ids of the documents producing it
#[derive(Debug, Default)]
pub struct InvertedIndex {
    postings: BTreeMap<String, PostingList>,
    total_postings: usize,
}

impl InvertedIndex {
    pub fn new() -> Self {
        InvertedIndex::default()
    }

    /// Adds `doc_id` to the posting list of every term.
    pub fn add_document<'a, I>(&mut self, doc_id: &DocId, terms: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        for term in terms {
            let list = self.postings.entry(term.to_string()).or_default();
            if list.add(doc_id.clone()) {
                self.total_postings += 1;
            }
        }
    }

    /// Removes `doc_id` from the given terms and drops lists left empty.
    pub fn remove_document<'a, I>(&mut self, doc_id: &DocId, terms: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        for term in terms {
            let Some(list) = self.postings.get_mut(term) else {
                continue;
            };
            if list.remove(doc_id) {
                self.total_postings -= 1;
            }
            if list.is_empty() {
                self.postings.remove(term);
            }
        }
    }

    pub fn search_term(&self, term: &str) -> Option<&PostingList> {
        self.postings.get(term)
    }

    pub fn doc_freq(&self, term: &str) -> u32 {
        self.postings.get(term).map(PostingList::doc_freq).unwrap_or(0)
    }

    /// `(term, document frequency)` pairs in term order.
    pub fn term_doc_freqs(&self) -> impl Iterator<Item = (&str, u32)> {
        self.postings
            .iter()
            .map(|(term, list)| (term.as_str(), list.doc_freq()))
    }

    /// Indexed terms within `(0, max_distance]` edits of `term`, with their distance.
    pub fn fuzzy_search(&self, term: &str, max_distance: usize) -> Vec<(&str, &PostingList, usize)> {
        if max_distance == 0 {
            return Vec::new();
        }

        let mut automaton = FuzzyAutomaton::new(term.to_string(), max_distance);
        automaton.build();

        self.postings
            .iter()
            .filter_map(|(candidate, list)| match automaton.distance(candidate) {
                Some(distance) if distance > 0 => Some((candidate.as_str(), list, distance)),
                _ => None,
            })
            .collect()
    }

    pub fn term_count(&self) -> usize {
        self.postings.len()
    }

    /// Number of (term, document) pairs across all posting lists.
    pub fn total_postings(&self) -> usize {
        self.total_postings
    }

    pub fn clear(&mut self) {
        self.postings.clear();
        self.total_postings = 0;
    }
}
