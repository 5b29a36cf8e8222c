//! Content loader - retrieves every content file and builds the store

use anyhow::Result;
use futures::future::join_all;

use super::frontmatter;
use super::source::ContentSource;
use super::store::{content_name, ContentStore};
use super::ContentRecord;
use crate::Site;

/// Loads the configured content files from a single source
pub struct ContentLoader<'a> {
    source: ContentSource,
    files: &'a [String],
}

impl<'a> ContentLoader<'a> {
    /// Create a loader for a site, using its configured source
    pub fn new(site: &'a Site) -> Result<Self> {
        let source = site.content_source()?;
        Ok(Self::with_source(source, &site.config.content_files))
    }

    /// Create a loader for an explicit source and file list
    pub fn with_source(source: ContentSource, files: &'a [String]) -> Self {
        Self { source, files }
    }

    /// Retrieve and parse every file concurrently.
    ///
    /// Waits for all retrievals to settle; a failed file is logged and left
    /// out of the store without affecting the others.
    pub async fn load_all(&self) -> ContentStore {
        let results = join_all(self.files.iter().map(|file| self.load_file(file))).await;

        let mut store = ContentStore::new();
        for (file, record) in self.files.iter().zip(results) {
            if let Some(record) = record {
                store.insert(content_name(file), record);
            }
        }

        tracing::debug!(
            "Loaded {}/{} content files from {}",
            store.len(),
            self.files.len(),
            self.source.describe()
        );

        store
    }

    /// Retrieve and parse one file; `None` when retrieval failed
    pub async fn load_file(&self, path: &str) -> Option<ContentRecord> {
        match self.source.fetch(path).await {
            Ok(text) => Some(frontmatter::parse(&text)),
            Err(e) => {
                tracing::warn!("Could not load {}: {}", path, e);
                None
            }
        }
    }
}
