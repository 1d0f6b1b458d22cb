use std::collections::BTreeSet;
use crate::core::types::DocId;

/// Posting list for a term
/// Note: ids are kept ordered so candidate iteration is deterministic
#[derive(Debug, Clone, Default)]
pub struct PostingList {
    pub doc_ids: BTreeSet<DocId>,
}

impl PostingList {
    /// Returns false if the id was already present.
    pub fn add(&mut self, doc_id: DocId) -> bool {
        self.doc_ids.insert(doc_id)
    }

    pub fn remove(&mut self, doc_id: &DocId) -> bool {
        self.doc_ids.remove(doc_id)
    }

    pub fn contains(&self, doc_id: &DocId) -> bool {
        self.doc_ids.contains(doc_id)
    }

    pub fn is_empty(&self) -> bool {
        self.doc_ids.is_empty()
    }

    pub fn doc_freq(&self) -> u32 {
        self.doc_ids.len() as u32
    }

    pub fn iter(&self) -> impl Iterator<Item = &DocId> {
        self.doc_ids.iter()
    }
}
