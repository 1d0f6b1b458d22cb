pub mod analyzer;
pub mod filter;
pub mod filters;
pub mod tokenizer;

use std::sync::LazyLock;
use crate::analysis::analyzer::Analyzer;

static STANDARD: LazyLock<Analyzer> = LazyLock::new(Analyzer::standard);

/// Tokenizes `text` with the standard analyzer.
pub fn tokenize(text: &str) -> Vec<String> {
    STANDARD.analyze(text)
}
