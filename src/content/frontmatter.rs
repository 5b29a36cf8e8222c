//! Front-matter parsing
//!
//! Content files carry a header between two lines consisting solely of
//! `---`. The header is a flat list of `key: value` lines; anything nested
//! deeper than a single-line JSON array is kept as a plain string.

use serde_json::Value;

use super::{ContentRecord, FieldValue};

/// Header delimiter line
pub const DELIMITER: &str = "---";

/// A content file split into its header and body lines
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrontMatter {
    /// Header lines, verbatim (blank lines included)
    pub header: Vec<String>,
    /// Lines after the header. Collected but not rendered.
    pub body: Vec<String>,
}

impl FrontMatter {
    /// Split raw text into header and body.
    ///
    /// Every delimiter line toggles the header state; the first closing
    /// delimiter also starts the body.
    pub fn split(text: &str) -> Self {
        let mut fm = FrontMatter::default();
        let mut in_header = false;
        let mut in_body = false;

        for line in text.split('\n') {
            if line.trim() == DELIMITER {
                if in_header {
                    in_body = true;
                }
                in_header = !in_header;
                continue;
            }

            if in_header {
                fm.header.push(line.to_string());
            } else if in_body {
                fm.body.push(line.to_string());
            }
        }

        fm
    }

    /// Decode the header into a record
    pub fn record(&self) -> ContentRecord {
        decode_header(&self.header.join("\n"))
    }

    /// Body text, lines rejoined
    pub fn body(&self) -> String {
        self.body.join("\n")
    }
}

/// Parse a content file into its record. Text without delimiters yields an
/// empty record.
pub fn parse(text: &str) -> ContentRecord {
    FrontMatter::split(text).record()
}

/// Decode `key: value` header lines
pub fn decode_header(header: &str) -> ContentRecord {
    let mut record = ContentRecord::new();

    for line in header.split('\n') {
        if line.trim().is_empty() {
            continue;
        }
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };

        record.insert(key.trim(), decode_value(value.trim()));
    }

    record
}

/// Decode a single raw value
pub fn decode_value(raw: &str) -> FieldValue {
    let value = strip_quotes(raw);

    let trimmed = value.trim();
    if trimmed.starts_with('[') && trimmed.ends_with(']') {
        match serde_json::from_str::<Value>(value) {
            Ok(json) => return FieldValue::Json(json),
            Err(e) => {
                tracing::debug!("Keeping bracketed value as text ({}): {}", e, value);
            }
        }
    }

    match value {
        "true" => FieldValue::Bool(true),
        "false" => FieldValue::Bool(false),
        _ => FieldValue::Text(value.to_string()),
    }
}

/// Remove one matching pair of surrounding double or single quotes
fn strip_quotes(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.starts_with(quote) && value.ends_with(quote) {
            // A lone quote character counts as both ends
            return value.get(1..value.len().saturating_sub(1)).unwrap_or("");
        }
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_basic_front_matter() {
        let content = r#"---
title: "Our Team"
description: 'Meet the people'
published: true
draft: false
count: 42
---

Body text that is not rendered.
"#;

        let record = parse(content);
        assert_eq!(record.get("title"), Some(&FieldValue::from("Our Team")));
        assert_eq!(
            record.get("description"),
            Some(&FieldValue::from("Meet the people"))
        );
        assert_eq!(record.get("published"), Some(&FieldValue::Bool(true)));
        assert_eq!(record.get("draft"), Some(&FieldValue::Bool(false)));
        // No numeric coercion
        assert_eq!(record.get("count"), Some(&FieldValue::from("42")));
    }

    #[test]
    fn test_json_arrays() {
        let record = parse("---\ntags: [\"a\",\"b\"]\nbroken: [a,b]\n---\n");
        assert_eq!(record.get("tags"), Some(&FieldValue::Json(json!(["a", "b"]))));
        assert_eq!(record.list("tags").map(|l| l.len()), Some(2));
        assert_eq!(record.get("broken"), Some(&FieldValue::from("[a,b]")));
    }

    #[test]
    fn test_array_of_objects() {
        let record = parse(
            "---\nmenu_items: [{\"text\": \"Home\", \"link\": \"#home\"}, {\"text\": \"About\", \"link\": \"#about\"}]\n---",
        );
        let items = record.list("menu_items").unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1]["link"], json!("#about"));
    }

    #[test]
    fn test_value_containing_colons() {
        let record = parse("---\nurl: https://example.com:8080/path\ntime: 10:30\n---");
        assert_eq!(
            record.get("url"),
            Some(&FieldValue::from("https://example.com:8080/path"))
        );
        assert_eq!(record.get("time"), Some(&FieldValue::from("10:30")));
    }

    #[test]
    fn test_quoted_booleans_and_arrays() {
        let record = parse("---\na: \"true\"\nb: '[1, 2]'\nc: \"\"\nd: \"\n---");
        assert_eq!(record.get("a"), Some(&FieldValue::Bool(true)));
        assert_eq!(record.get("b"), Some(&FieldValue::Json(json!([1, 2]))));
        assert_eq!(record.get("c"), Some(&FieldValue::from("")));
        assert_eq!(record.get("d"), Some(&FieldValue::from("")));
    }

    #[test]
    fn test_case_sensitive_booleans() {
        let record = parse("---\na: True\nb: FALSE\n---");
        assert_eq!(record.get("a"), Some(&FieldValue::from("True")));
        assert_eq!(record.get("b"), Some(&FieldValue::from("FALSE")));
    }

    #[test]
    fn test_repeated_key_last_wins() {
        let record = parse("---\ntitle: One\ntitle: Two\ntitle: Three\n---");
        assert_eq!(record.len(), 1);
        assert_eq!(record.text("title"), Some("Three".to_string()));
    }

    #[test]
    fn test_no_delimiters_yields_empty_record() {
        let record = parse("title: Not a header\nJust text.");
        assert!(record.is_empty());
    }

    #[test]
    fn test_skips_blank_and_colonless_lines() {
        let record = parse("---\n\n  \njust words\nkey: value\n---");
        assert_eq!(record.len(), 1);
        assert_eq!(record.text("key"), Some("value".to_string()));
    }

    #[test]
    fn test_nested_yaml_is_not_structured() {
        let record = parse("---\nslides:\n  - title: One\n---");
        // Line-based decoding: the nested line becomes its own key
        assert_eq!(record.get("slides"), Some(&FieldValue::from("")));
        assert_eq!(record.get("- title"), Some(&FieldValue::from("One")));
    }

    #[test]
    fn test_split_header_and_body() {
        let fm = FrontMatter::split("intro\n---\r\na: 1\r\n\r\n---\nbody one\nbody two");
        assert_eq!(fm.header, vec!["a: 1\r", "\r"]);
        assert_eq!(fm.body(), "body one\nbody two");
        assert_eq!(fm.record().text("a"), Some("1".to_string()));
    }

    #[test]
    fn test_third_delimiter_reopens_header() {
        let record = parse("---\na: 1\n---\nbody\n---\nb: 2\n---");
        assert_eq!(record.text("a"), Some("1".to_string()));
        assert_eq!(record.text("b"), Some("2".to_string()));
    }

    #[test]
    fn test_unterminated_header() {
        let record = parse("---\ntitle: Open\n");
        assert_eq!(record.text("title"), Some("Open".to_string()));
    }
}
