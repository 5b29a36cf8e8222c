//! `navigation`: main menu links, patched in place

use crate::content::ContentRecord;
use crate::page::{Page, PageError};

use super::view::{items, Item};
use super::RenderOptions;

const MENU_LINKS: &str = ".main-menu ul li a";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuItem {
    pub text: Option<String>,
    pub link: Option<String>,
}

impl MenuItem {
    fn from_item(item: &Item<'_>) -> Self {
        Self {
            text: item.text("text"),
            link: item.text("link"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Navigation {
    pub menu_items: Vec<MenuItem>,
}

impl Navigation {
    /// `None` when the record has no `menu_items` list
    pub fn from_record(record: &ContentRecord) -> Option<Self> {
        let menu_items = items(record, "menu_items")?
            .iter()
            .map(MenuItem::from_item)
            .collect();
        Some(Self { menu_items })
    }
}

pub fn render(
    record: &ContentRecord,
    page: &mut Page,
    _options: &RenderOptions,
) -> Result<(), PageError> {
    let Some(nav) = Navigation::from_record(record) else {
        return Ok(());
    };

    let links = page.select_all(MENU_LINKS)?;
    for (item, link) in nav.menu_items.iter().zip(links) {
        if let Some(text) = &item.text {
            page.set_text(link, text);
        }
        if let Some(href) = &item.link {
            page.set_attr(link, "href", href);
        }
    }

    Ok(())
}
