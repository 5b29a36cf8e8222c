//! In-memory content store, keyed by content file name

use indexmap::IndexMap;
use serde::Serialize;

use super::ContentRecord;

/// Records for one page load, keyed by file base name (`about`, `team`, ...).
///
/// Filled once by the loader and only read while rendering.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct ContentStore {
    records: IndexMap<String, ContentRecord>,
}

impl ContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, record: ContentRecord) {
        self.records.insert(name.into(), record);
    }

    pub fn get(&self, name: &str) -> Option<&ContentRecord> {
        self.records.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    /// Record names in load order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ContentRecord)> {
        self.records.iter().map(|(name, record)| (name.as_str(), record))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Store key for a content path: last path segment without its extension
///
/// ```ignore
/// content_name("content/site-settings.md") // -> "site-settings"
/// ```
pub fn content_name(path: &str) -> &str {
    let file = path.rsplit(['/', '\\']).next().unwrap_or(path);
    match file.rfind('.') {
        Some(pos) if pos > 0 => &file[..pos],
        _ => file,
    }
}
