//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::helpers::DEFAULT_WHATSAPP_GREETING;

/// Content files loaded for every page, in load order
pub const DEFAULT_CONTENT_FILES: [&str; 11] = [
    "content/site-settings.md",
    "content/hero-slides.md",
    "content/about.md",
    "content/team.md",
    "content/services.md",
    "content/projects.md",
    "content/testimonials.md",
    "content/blog.md",
    "content/contact.md",
    "content/footer.md",
    "content/navigation.md",
];

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Page
    pub page: String,
    pub output: String,

    // Content
    pub content_dir: String,
    pub content_url: Option<String>,
    pub content_files: Vec<String>,
    /// Per-request timeout for HTTP content; no timeout when unset
    pub request_timeout_secs: Option<u64>,

    // Contact
    pub whatsapp_greeting: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            page: "index.html".to_string(),
            output: "public/index.html".to_string(),

            content_dir: ".".to_string(),
            content_url: None,
            content_files: DEFAULT_CONTENT_FILES.iter().map(|f| f.to_string()).collect(),
            request_timeout_secs: None,

            whatsapp_greeting: DEFAULT_WHATSAPP_GREETING.to_string(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}
