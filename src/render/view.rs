//! Tolerant field extraction for section views
//!
//! List entries come from decoded JSON. Anything of the wrong shape reads as
//! absent, so views never fail to build.

use serde_json::{Map, Value};

use crate::content::{json_text, ContentRecord};

/// One entry of a list field, or of a nested object
#[derive(Debug, Clone, Copy)]
pub struct Item<'a> {
    fields: Option<&'a Map<String, Value>>,
}

impl<'a> Item<'a> {
    pub fn new(value: &'a Value) -> Self {
        Self {
            fields: value.as_object(),
        }
    }

    /// Non-empty scalar field as text
    pub fn text(&self, key: &str) -> Option<String> {
        self.fields.and_then(|fields| json_text(fields, key))
    }

    /// Nested object field; empty when missing
    pub fn object(&self, key: &str) -> Item<'a> {
        Item {
            fields: self
                .fields
                .and_then(|fields| fields.get(key))
                .and_then(Value::as_object),
        }
    }

    pub fn get(&self, key: &str) -> Option<&'a Value> {
        self.fields.and_then(|fields| fields.get(key))
    }
}

/// Entries of a list field, `None` when the field is not a list
pub fn items<'a>(record: &'a ContentRecord, key: &str) -> Option<Vec<Item<'a>>> {
    record
        .list(key)
        .map(|list| list.iter().map(Item::new).collect())
}

/// Object field of a record as an item; empty when missing
pub fn object<'a>(record: &'a ContentRecord, key: &str) -> Item<'a> {
    Item {
        fields: record.object(key),
    }
}
