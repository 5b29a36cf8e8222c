//! content-loader: populates a static page from markdown front-matter content
//!
//! Content files are retrieved concurrently, their headers parsed into flat
//! records, and a fixed sequence of section renderers patches the page
//! document with the results.

pub mod commands;
pub mod config;
pub mod content;
pub mod helpers;
pub mod page;
pub mod render;
pub mod server;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::time::Duration;

use content::{ContentLoader, ContentSource, ContentStore};
use page::Page;
use render::{RenderOptions, Renderer};

/// A site: its configuration and the paths derived from it
#[derive(Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Page template
    pub page_path: PathBuf,
    /// Rendered page
    pub output_path: PathBuf,
    /// Directory content paths are resolved against
    pub content_dir: PathBuf,
}

impl Site {
    /// Create a site from a directory, reading `_config.yml` when present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)
                .with_context(|| format!("Failed to load {:?}", config_path))?
        } else {
            config::SiteConfig::default()
        };

        let page_path = base_dir.join(&config.page);
        let output_path = base_dir.join(&config.output);
        let content_dir = base_dir.join(&config.content_dir);

        Ok(Self {
            config,
            base_dir,
            page_path,
            output_path,
            content_dir,
        })
    }

    /// Where content is retrieved from: `content_url` when set, otherwise
    /// the content directory
    pub fn content_source(&self) -> Result<ContentSource> {
        match &self.config.content_url {
            Some(url) => {
                let timeout = self.config.request_timeout_secs.map(Duration::from_secs);
                Ok(ContentSource::http(url, timeout)?)
            }
            None => Ok(ContentSource::Directory(self.content_dir.clone())),
        }
    }

    /// Retrieve and parse every configured content file
    pub async fn load_content(&self) -> Result<ContentStore> {
        let loader = ContentLoader::new(self)?;
        Ok(loader.load_all().await)
    }

    /// Render a page template with freshly loaded content.
    ///
    /// A failing section is logged and the partially rendered page is
    /// still returned.
    pub async fn render_template(&self, template: &str) -> Result<String> {
        let store = self.load_content().await?;
        let mut page = Page::parse(template);

        let renderer = Renderer::new(&store, RenderOptions::from_config(&self.config));
        match renderer.render(&mut page) {
            Ok(count) => tracing::debug!("Rendered {} sections", count),
            Err(e) => tracing::error!("Rendering stopped: {}", e),
        }

        Ok(page.to_html())
    }

    /// Render the configured page template
    pub async fn render_page(&self) -> Result<String> {
        let template = tokio::fs::read_to_string(&self.page_path)
            .await
            .with_context(|| format!("Failed to read page template {:?}", self.page_path))?;
        self.render_template(&template).await
    }

    /// Initialize a new site
    pub fn init(&self) -> Result<()> {
        commands::init::run(self)
    }

    /// Render the page to the output file
    pub async fn render(&self) -> Result<PathBuf> {
        commands::render::run(self).await
    }
}
