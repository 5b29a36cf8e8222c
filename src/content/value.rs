//! Decoded front-matter values and records

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

/// A single decoded front-matter value
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Plain string, quotes already stripped
    Text(String),
    /// Literal `true` / `false`
    Bool(bool),
    /// Bracketed value that decoded as a JSON literal
    Json(Value),
}

impl FieldValue {
    /// The decoded sequence, if this is a JSON array
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            FieldValue::Json(Value::Array(items)) => Some(items),
            _ => None,
        }
    }

    /// The decoded object, if this is a JSON object
    pub fn as_object(&self) -> Option<&serde_json::Map<String, Value>> {
        match self {
            FieldValue::Json(Value::Object(map)) => Some(map),
            _ => None,
        }
    }

    /// Text usable in a text slot; `None` when the value would not render
    pub fn display_text(&self) -> Option<String> {
        let text = match self {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Bool(true) => "true".to_string(),
            FieldValue::Bool(false) => return None,
            FieldValue::Json(Value::Array(items)) => items
                .iter()
                .map(scalar_text)
                .collect::<Option<Vec<_>>>()?
                .join(","),
            FieldValue::Json(_) => return None,
        };

        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

impl From<Value> for FieldValue {
    fn from(v: Value) -> Self {
        FieldValue::Json(v)
    }
}

/// Key/value data decoded from one content file's front-matter.
///
/// Keys keep their first-seen position; a repeated key overwrites the value.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ContentRecord {
    fields: IndexMap<String, FieldValue>,
}

impl ContentRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field, replacing any earlier value for the same key
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<FieldValue>) {
        self.fields.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key)
    }

    /// Renderable text for `key`
    pub fn text(&self, key: &str) -> Option<String> {
        self.get(key).and_then(FieldValue::display_text)
    }

    /// JSON list stored under `key`
    pub fn list(&self, key: &str) -> Option<&[Value]> {
        self.get(key).and_then(FieldValue::as_list)
    }

    /// JSON object stored under `key`
    pub fn object(&self, key: &str) -> Option<&serde_json::Map<String, Value>> {
        self.get(key).and_then(FieldValue::as_object)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Stringify a JSON scalar the way it would appear in page text
pub fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Non-empty scalar field of a JSON object
pub fn json_text(object: &serde_json::Map<String, Value>, key: &str) -> Option<String> {
    object
        .get(key)
        .and_then(scalar_text)
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_display_text() {
        assert_eq!(
            FieldValue::from("Hello").display_text(),
            Some("Hello".to_string())
        );
        assert_eq!(FieldValue::from("").display_text(), None);
        assert_eq!(FieldValue::from(true).display_text(), Some("true".into()));
        assert_eq!(FieldValue::from(false).display_text(), None);
        assert_eq!(
            FieldValue::from(json!(["a", 1, true])).display_text(),
            Some("a,1,true".to_string())
        );
        assert_eq!(FieldValue::from(json!([{"a": 1}])).display_text(), None);
    }

    #[test]
    fn test_record_overwrites_keep_position() {
        let mut record = ContentRecord::new();
        record.insert("title", "First");
        record.insert("description", "Text");
        record.insert("title", "Second");

        assert_eq!(record.len(), 2);
        assert_eq!(record.text("title"), Some("Second".to_string()));
        assert_eq!(record.keys().collect::<Vec<_>>(), vec!["title", "description"]);
    }

    #[test]
    fn test_list_and_object_access() {
        let mut record = ContentRecord::new();
        record.insert("items", json!([{"text": "Home"}]));
        record.insert("links", json!({"facebook": "https://facebook.com/x"}));
        record.insert("plain", "[not json");

        assert_eq!(record.list("items").map(|l| l.len()), Some(1));
        assert!(record.list("plain").is_none());
        assert!(record.list("links").is_none());
        let links = record.object("links").unwrap();
        assert_eq!(
            json_text(links, "facebook"),
            Some("https://facebook.com/x".to_string())
        );
        assert_eq!(json_text(links, "youtube"), None);
    }

    #[test]
    fn test_serialize_untagged() {
        let mut record = ContentRecord::new();
        record.insert("title", "Home");
        record.insert("draft", false);
        record.insert("tags", json!(["a", "b"]));

        let out = serde_json::to_string(&record).unwrap();
        assert_eq!(out, r#"{"title":"Home","draft":false,"tags":["a","b"]}"#);
    }
}
