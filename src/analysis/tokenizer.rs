use std::sync::LazyLock;
use regex::Regex;

/// Anything that is neither a word character nor whitespace
static PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s]").expect("punctuation pattern is valid"));

pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Vec<String>;

    fn name(&self) -> &str;

    fn clone_box(&self) -> Box<dyn Tokenizer>;
}

/// Replaces punctuation with spaces and splits on whitespace runs
#[derive(Clone)]
pub struct StandardTokenizer {
    pub lowercase: bool,
}

impl Default for StandardTokenizer {
    fn default() -> Self {
        StandardTokenizer { lowercase: true }
    }
}

impl Tokenizer for StandardTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        let text_to_process = if self.lowercase {
            text.to_lowercase()
        } else {
            text.to_string()
        };

        PUNCTUATION
            .replace_all(&text_to_process, " ")
            .split_whitespace()
            .map(String::from)
            .collect()
    }

    fn name(&self) -> &str {
        "standard"
    }

    fn clone_box(&self) -> Box<dyn Tokenizer> {
        Box::new(self.clone())
    }
}

/// Strips punctuation from a single word and lowercases it.
pub fn normalize_word(word: &str) -> String {
    PUNCTUATION.replace_all(word, "").to_lowercase()
}
