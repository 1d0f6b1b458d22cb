use std::collections::HashSet;
use crate::analysis::filter::TokenFilter;

pub struct StopWordFilter {
    pub stop_words: HashSet<String>,
}

impl StopWordFilter {
    pub fn new(stop_words: Vec<String>) -> Self {
        StopWordFilter {
            stop_words: stop_words.into_iter().collect(),
        }
    }
}

impl TokenFilter for StopWordFilter {
    fn filter(&self, tokens: Vec<String>) -> Vec<String> {
        tokens.into_iter()
            .filter(|token| !self.stop_words.contains(token))
            .collect()
    }

    fn name(&self) -> &str {
        "stop_words"
    }

    fn clone_box(&self) -> Box<dyn TokenFilter> {
        Box::new(StopWordFilter {
            stop_words: self.stop_words.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::DEFAULT_STOPWORDS;

    #[test]
    fn test_drops_stopwords() {
        let tokens = vec!["the".to_string(), "quick".to_string(), "and".to_string()];
        let filter = StopWordFilter::new(DEFAULT_STOPWORDS.iter().map(|w| w.to_string()).collect());
        assert_eq!(filter.filter(tokens), vec!["quick"]);
    }
}
