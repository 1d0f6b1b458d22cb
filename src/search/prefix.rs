use fst::{IntoStreamer, Map, Streamer};
use crate::core::error::Result;

/// FST-based index for prefix queries over the term dictionary
#[derive(Default)]
pub struct PrefixIndex {
    /// Finite state transducer mapping term → document frequency
    fst: Map<Vec<u8>>,
}

impl PrefixIndex {
    /// Build FST from terms; input must be sorted and distinct
    pub fn build<'a, I>(terms: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, u32)>,
    {
        let fst = Map::from_iter(
            terms.into_iter().map(|(term, freq)| (term.as_bytes(), freq as u64)),
        )?;
        Ok(PrefixIndex { fst })
    }

    /// Up to `limit` terms with the given prefix, in lexicographic order
    pub fn search_prefix(&self, prefix: &str, limit: usize) -> Vec<String> {
        let mut results = Vec::new();
        let prefix_bytes = prefix.as_bytes();

        // Range query starting at the prefix; terms sharing it are contiguous
        let mut stream = self.fst.range().ge(prefix_bytes).into_stream();

        while let Some((term_bytes, _freq)) = stream.next() {
            if results.len() >= limit || !term_bytes.starts_with(prefix_bytes) {
                break;
            }

            if let Ok(term) = std::str::from_utf8(term_bytes) {
                results.push(term.to_string());
            }
        }

        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index() -> PrefixIndex {
        PrefixIndex::build([("comet", 2), ("comets", 1), ("cosmic", 1), ("nebula", 3)]).unwrap()
    }

    #[test]
    fn test_prefix_search_sorted_and_bounded() {
        let index = index();
        assert_eq!(index.search_prefix("com", 10), vec!["comet", "comets"]);
        assert_eq!(index.search_prefix("co", 2), vec!["comet", "comets"]);
        assert_eq!(index.search_prefix("co", 10), vec!["comet", "comets", "cosmic"]);
        assert!(index.search_prefix("zeta", 10).is_empty());
        assert!(index.search_prefix("com", 0).is_empty());
    }

    #[test]
    fn test_unsorted_input_is_an_error() {
        assert!(PrefixIndex::build([("nebula", 1), ("comet", 1)]).is_err());
    }

    #[test]
    fn test_default_is_empty() {
        let index = PrefixIndex::default();
        assert!(index.search_prefix("", 5).is_empty());
    }
}
