use crate::analysis::filter::TokenFilter;

/// Drops tokens with fewer than `min_length` characters
#[derive(Clone)]
pub struct MinLengthFilter {
    pub min_length: usize,
}

impl MinLengthFilter {
    pub fn new(min_length: usize) -> Self {
        MinLengthFilter { min_length }
    }
}

impl TokenFilter for MinLengthFilter {
    fn filter(&self, tokens: Vec<String>) -> Vec<String> {
        tokens.into_iter()
            .filter(|token| token.chars().count() >= self.min_length)
            .collect()
    }

    fn name(&self) -> &str {
        "min_length"
    }

    fn clone_box(&self) -> Box<dyn TokenFilter> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_characters_not_bytes() {
        let tokens = vec!["éé".to_string(), "ééé".to_string(), "ab".to_string()];
        assert_eq!(MinLengthFilter::new(3).filter(tokens), vec!["ééé"]);
    }
}
