//! `site-settings`: document title and meta tags

use crate::content::ContentRecord;
use crate::page::{Page, PageError};

use super::RenderOptions;

const META_TITLE: &str = r#"meta[name="title"]"#;
const META_DESCRIPTION: &str = r#"meta[name="description"]"#;
const META_KEYWORDS: &str = r#"meta[name="keywords"]"#;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SiteSettings {
    pub title: Option<String>,
    pub description: Option<String>,
    pub keywords: Option<String>,
}

impl SiteSettings {
    pub fn from_record(record: &ContentRecord) -> Self {
        Self {
            title: record.text("title"),
            description: record.text("description"),
            keywords: record.text("keywords"),
        }
    }
}

pub fn render(
    record: &ContentRecord,
    page: &mut Page,
    _options: &RenderOptions,
) -> Result<(), PageError> {
    let settings = SiteSettings::from_record(record);

    if let Some(title) = &settings.title {
        page.set_title(title)?;
        page.fill_attr(META_TITLE, "content", Some(title))?;
    }
    page.fill_attr(META_DESCRIPTION, "content", settings.description.as_deref())?;
    page.fill_attr(META_KEYWORDS, "content", settings.keywords.as_deref())?;

    Ok(())
}
