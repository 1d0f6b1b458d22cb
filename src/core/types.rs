use serde::{Serialize, Deserialize};
use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::fmt;

/// Opaque, caller-supplied document identifier
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocId(pub String);

impl DocId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for DocId {
    fn from(id: &str) -> Self {
        DocId(id.to_string())
    }
}

impl From<String> for DocId {
    fn from(id: String) -> Self {
        DocId(id)
    }
}

impl Borrow<str> for DocId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    List(Vec<String>),
}

impl FieldValue {
    /// Text used for tokenizing and highlighting; list items are joined with spaces.
    pub fn as_text(&self) -> String {
        match self {
            FieldValue::Text(text) => text.clone(),
            FieldValue::List(items) => items.join(" "),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Text(text) => text.is_empty(),
            FieldValue::List(items) => items.is_empty(),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(text: &str) -> Self {
        FieldValue::Text(text.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(text: String) -> Self {
        FieldValue::Text(text)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(items: Vec<String>) -> Self {
        FieldValue::List(items)
    }
}

impl From<Vec<&str>> for FieldValue {
    fn from(items: Vec<&str>) -> Self {
        FieldValue::List(items.into_iter().map(String::from).collect())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    pub fields: BTreeMap<String, FieldValue>,
}

impl Document {
    pub fn new() -> Self {
        Document::default()
    }

    pub fn with_field(mut self, name: &str, value: impl Into<FieldValue>) -> Self {
        self.add_field(name.to_string(), value.into());
        self
    }

    pub fn add_field(&mut self, name: String, value: FieldValue) {
        self.fields.insert(name, value);
    }

    pub fn get_field(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// Concatenated text of the named fields, skipping absent ones.
    pub fn text_of(&self, fields: &[String]) -> String {
        fields
            .iter()
            .filter_map(|name| self.get_field(name))
            .map(FieldValue::as_text)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// One entry of a batch insert
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentEntry {
    pub id: DocId,
    pub document: Document,
    pub fields: Vec<String>,
}

impl DocumentEntry {
    pub fn new(id: impl Into<DocId>, document: Document, fields: &[&str]) -> Self {
        DocumentEntry {
            id: id.into(),
            document,
            fields: fields.iter().map(|f| f.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_of_joins_lists_and_skips_missing() {
        let doc = Document::new()
            .with_field("title", "Comet Tutorial")
            .with_field("tags", vec!["space", "astronomy"]);
        let fields = vec!["title".to_string(), "missing".to_string(), "tags".to_string()];
        assert_eq!(doc.text_of(&fields), "Comet Tutorial space astronomy");
    }

    #[test]
    fn test_field_value_deserializes_untagged() {
        let doc: Document =
            serde_json::from_str(r#"{"name": "Nebula", "tags": ["a", "b"]}"#).unwrap();
        assert_eq!(doc.get_field("name"), Some(&FieldValue::Text("Nebula".into())));
        assert_eq!(doc.get_field("tags"), Some(&FieldValue::from(vec!["a", "b"])));
    }

    #[test]
    fn test_empty_values() {
        assert!(FieldValue::from("").is_empty());
        assert!(FieldValue::List(vec![]).is_empty());
        assert!(!FieldValue::from("x").is_empty());
    }
}
