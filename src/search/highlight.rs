use crate::analysis::tokenizer::normalize_word;
use crate::core::config::IndexConfig;
use crate::core::types::Document;
use crate::search::results::Highlight;

/// Wraps matched words in a marker pair
#[derive(Debug, Clone)]
pub struct Highlighter {
    pub pre_tag: String,
    pub post_tag: String,
}

impl Default for Highlighter {
    fn default() -> Self {
        Highlighter::from_config(&IndexConfig::default())
    }
}

impl Highlighter {
    pub fn from_config(config: &IndexConfig) -> Self {
        Highlighter {
            pre_tag: config.highlight_pre_tag.clone(),
            post_tag: config.highlight_post_tag.clone(),
        }
    }

    /// Annotates each field containing a word that includes any of `terms`.
    /// Fields without a marked word are left out.
    pub fn highlight(&self, document: &Document, fields: &[String], terms: &[String]) -> Vec<Highlight> {
        if terms.is_empty() {
            return Vec::new();
        }

        let mut highlights = Vec::new();
        for field in fields {
            let Some(value) = document.get_field(field) else {
                continue;
            };
            if let Some(text) = self.highlight_text(&value.as_text(), terms) {
                highlights.push(Highlight {
                    field: field.clone(),
                    text,
                });
            }
        }
        highlights
    }

    fn highlight_text(&self, text: &str, terms: &[String]) -> Option<String> {
        let mut marked = false;
        let words: Vec<String> = text
            .split_whitespace()
            .map(|word| {
                let clean = normalize_word(word);
                if terms.iter().any(|term| clean.contains(term.as_str())) {
                    marked = true;
                    format!("{}{}{}", self.pre_tag, word, self.post_tag)
                } else {
                    word.to_string()
                }
            })
            .collect();

        marked.then(|| words.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terms(list: &[&str]) -> Vec<String> {
        list.iter().map(|t| t.to_string()).collect()
    }

    fn fields(list: &[&str]) -> Vec<String> {
        list.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_marks_original_word() {
        let doc = Document::new()
            .with_field("name", "Comet Tutorial")
            .with_field("description", "Learn about Comets, quickly!");
        let highlights =
            Highlighter::default().highlight(&doc, &fields(&["name", "description"]), &terms(&["comet"]));

        assert_eq!(highlights.len(), 2);
        assert_eq!(highlights[0].field, "name");
        assert_eq!(highlights[0].text, "<mark>Comet</mark> Tutorial");
        assert_eq!(highlights[1].text, "Learn about <mark>Comets,</mark> quickly!");
    }

    #[test]
    fn test_skips_fields_without_matches() {
        let doc = Document::new()
            .with_field("name", "Nebula Guide")
            .with_field("description", "Learn Comet");
        let highlights =
            Highlighter::default().highlight(&doc, &fields(&["name", "description", "absent"]), &terms(&["comet"]));

        assert_eq!(highlights.len(), 1);
        assert_eq!(highlights[0].field, "description");
    }

    #[test]
    fn test_custom_tags_and_list_fields() {
        let config = IndexConfig {
            highlight_pre_tag: "[".to_string(),
            highlight_post_tag: "]".to_string(),
            ..IndexConfig::default()
        };
        let doc = Document::new().with_field("tags", vec!["astronomy", "space"]);
        let highlights =
            Highlighter::from_config(&config).highlight(&doc, &fields(&["tags"]), &terms(&["astro"]));

        assert_eq!(highlights[0].text, "[astronomy] space");
    }

    #[test]
    fn test_no_terms_no_highlights() {
        let doc = Document::new().with_field("name", "Comet");
        assert!(Highlighter::default().highlight(&doc, &fields(&["name"]), &[]).is_empty());
    }
}
