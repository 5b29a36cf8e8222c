//! `contact`: heading, contact widget rows and the map frame

use scraper::{Html, Selector};

use crate::content::ContentRecord;
use crate::helpers::{mailto_url, tel_url, whatsapp_url};
use crate::page::{Page, PageError};

use super::RenderOptions;

const TITLE: &str = "#contact-sec .sec-title";
const DESCRIPTION: &str = "#contact-sec .sec-text";
const ADDRESS: &str = ".th-widget-contact .info-box_text:nth-child(1) .details p";
const PHONE: &str = ".th-widget-contact .info-box_text:nth-child(2) .details a";
const WHATSAPP: &str = ".th-widget-contact .info-box_text:nth-child(3) .details a";
const EMAIL: &str = ".th-widget-contact .info-box_text:nth-child(4) .details a";
const MAP: &str = ".contact-map iframe";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Contact {
    pub title: Option<String>,
    pub description: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub whatsapp: Option<String>,
    pub email: Option<String>,
    pub map_embed: Option<String>,
}

impl Contact {
    pub fn from_record(record: &ContentRecord) -> Self {
        Self {
            title: record.text("title"),
            description: record.text("description"),
            address: record.text("address"),
            phone: record.text("phone"),
            whatsapp: record.text("whatsapp"),
            email: record.text("email"),
            map_embed: record.text("map_embed"),
        }
    }
}

/// Iframe attributes from a `map_embed` value.
///
/// Embed markup yields every attribute of its first iframe with a `src`;
/// anything else is taken as the URL itself. Empty when there is nothing
/// to apply.
pub fn embed_attributes(map_embed: &str) -> Vec<(String, String)> {
    let value = map_embed.trim();
    if value.is_empty() {
        return Vec::new();
    }
    if !value.starts_with('<') {
        return vec![("src".to_string(), value.to_string())];
    }

    let fragment = Html::parse_fragment(value);
    let Ok(selector) = Selector::parse("iframe[src]") else {
        return Vec::new();
    };
    fragment
        .select(&selector)
        .next()
        .map(|iframe| {
            iframe
                .value()
                .attrs()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect()
        })
        .unwrap_or_default()
}

/// Set the text and `href` of a link, when both exist
fn fill_link(
    page: &mut Page,
    selector: &str,
    text: Option<&str>,
    href: impl FnOnce(&str) -> String,
) -> Result<(), PageError> {
    let (Some(id), Some(text)) = (page.select_first(selector)?, text) else {
        return Ok(());
    };
    page.set_text(id, text);
    page.set_attr(id, "href", &href(text));
    Ok(())
}

pub fn render(
    record: &ContentRecord,
    page: &mut Page,
    options: &RenderOptions,
) -> Result<(), PageError> {
    let contact = Contact::from_record(record);

    page.fill_text(TITLE, contact.title.as_deref())?;
    page.fill_text(DESCRIPTION, contact.description.as_deref())?;
    page.fill_text(ADDRESS, contact.address.as_deref())?;

    fill_link(page, PHONE, contact.phone.as_deref(), tel_url)?;
    fill_link(page, WHATSAPP, contact.whatsapp.as_deref(), |number| {
        whatsapp_url(number, &options.whatsapp_greeting)
    })?;
    fill_link(page, EMAIL, contact.email.as_deref(), mailto_url)?;

    let embed = contact
        .map_embed
        .as_deref()
        .map(embed_attributes)
        .unwrap_or_default();
    if let (Some(map), false) = (page.select_first(MAP)?, embed.is_empty()) {
        for (name, value) in &embed {
            page.set_attr(map, name, value);
        }
    }

    Ok(())
}
