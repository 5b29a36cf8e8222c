//! Render module - patches the page from the content store, one section at a time

mod about;
mod blog;
mod contact;
mod footer;
mod hero;
mod navigation;
mod projects;
mod services;
mod site_settings;
mod team;
mod testimonials;
pub mod view;

pub use contact::embed_attributes;
pub use testimonials::star_count;

use crate::config::SiteConfig;
use crate::content::{ContentRecord, ContentStore};
use crate::helpers::DEFAULT_WHATSAPP_GREETING;
use crate::page::{Page, PageError};

/// Settings shared by every section renderer
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Text pre-filled in WhatsApp chats opened from the contact section
    pub whatsapp_greeting: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            whatsapp_greeting: DEFAULT_WHATSAPP_GREETING.to_string(),
        }
    }
}

impl RenderOptions {
    pub fn from_config(config: &SiteConfig) -> Self {
        Self {
            whatsapp_greeting: config.whatsapp_greeting.clone(),
        }
    }
}

type SectionFn = fn(&ContentRecord, &mut Page, &RenderOptions) -> Result<(), PageError>;

/// Section renderers in the order they run, keyed by content name
pub const SECTIONS: [(&str, SectionFn); 11] = [
    ("site-settings", site_settings::render),
    ("navigation", navigation::render),
    ("hero-slides", hero::render),
    ("about", about::render),
    ("team", team::render),
    ("services", services::render),
    ("projects", projects::render),
    ("testimonials", testimonials::render),
    ("blog", blog::render),
    ("contact", contact::render),
    ("footer", footer::render),
];

/// Applies every section renderer to a page
pub struct Renderer<'a> {
    store: &'a ContentStore,
    options: RenderOptions,
}

impl<'a> Renderer<'a> {
    pub fn new(store: &'a ContentStore, options: RenderOptions) -> Self {
        Self { store, options }
    }

    /// Run the sections in order and return how many had content.
    ///
    /// Sections without a record are skipped. An error stops the pass and
    /// leaves earlier sections applied.
    pub fn render(&self, page: &mut Page) -> Result<usize, PageError> {
        let mut rendered = 0;

        for (name, section) in SECTIONS {
            let Some(record) = self.store.get(name) else {
                tracing::debug!("No content for section {}, skipping", name);
                continue;
            };

            section(record, page, &self.options)?;
            rendered += 1;
        }

        Ok(rendered)
    }
}
