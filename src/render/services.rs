//! `services`: heading plus the fixed service card placeholders, patched by index

use crate::content::ContentRecord;
use crate::page::{Page, PageError};

use super::view::{items, Item};
use super::RenderOptions;

const TITLE: &str = "#service-sec .sec-title";
const DESCRIPTION: &str = "#service-sec .sec-text";
const CARDS: &str = ".service-card";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServiceCard {
    pub title: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
}

impl ServiceCard {
    fn from_item(item: &Item<'_>) -> Self {
        Self {
            title: item.text("title"),
            description: item.text("description"),
            icon: item.text("icon"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Services {
    pub title: Option<String>,
    pub description: Option<String>,
    pub cards: Vec<ServiceCard>,
}

impl Services {
    /// `None` when the record has no `service_cards` list
    pub fn from_record(record: &ContentRecord) -> Option<Self> {
        let cards = items(record, "service_cards")?
            .iter()
            .map(ServiceCard::from_item)
            .collect();
        Some(Self {
            title: record.text("title"),
            description: record.text("description"),
            cards,
        })
    }
}

pub fn render(
    record: &ContentRecord,
    page: &mut Page,
    _options: &RenderOptions,
) -> Result<(), PageError> {
    let Some(services) = Services::from_record(record) else {
        return Ok(());
    };

    page.fill_text(TITLE, services.title.as_deref())?;
    page.fill_text(DESCRIPTION, services.description.as_deref())?;

    let placeholders = page.select_all(CARDS)?;
    for (card, scope) in services.cards.iter().zip(placeholders) {
        page.fill_text_in(scope, ".box-title a", card.title.as_deref())?;
        page.fill_text_in(scope, ".box-text", card.description.as_deref())?;
        page.fill_attr_in(scope, ".icon img", "src", card.icon.as_deref())?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::frontmatter;

    const HTML: &str = r#"<html><body><section id="service-sec">
<h2 class="sec-title">Services</h2><p class="sec-text">What we do</p>
<div class="service-card"><div class="icon"><img src="s1.svg"></div><h3 class="box-title"><a href="service.html">One</a></h3><p class="box-text">First</p></div>
<div class="service-card"><div class="icon"><img src="s2.svg"></div><h3 class="box-title"><a href="service.html">Two</a></h3><p class="box-text">Second</p></div>
</section></body></html>"#;

    fn texts(page: &Page, selector: &str) -> Vec<String> {
        page.select_all(selector)
            .unwrap()
            .into_iter()
            .filter_map(|id| page.text(id))
            .collect()
    }

    #[test]
    fn test_patches_cards_by_index() {
        let record = frontmatter::parse(
            r#"---
title: What We Offer
service_cards: [{"title": "Renovation", "description": "Old to new", "icon": "icons/reno.svg"}]
---"#,
        );
        let mut page = Page::parse(HTML);
        render(&record, &mut page, &RenderOptions::default()).unwrap();

        assert_eq!(texts(&page, TITLE), vec!["What We Offer"]);
        assert_eq!(texts(&page, DESCRIPTION), vec!["What we do"]);
        assert_eq!(texts(&page, ".service-card .box-title a"), vec!["Renovation", "Two"]);
        assert_eq!(texts(&page, ".service-card .box-text"), vec!["Old to new", "Second"]);

        let icons: Vec<_> = page
            .select_all(".service-card .icon img")
            .unwrap()
            .into_iter()
            .filter_map(|id| page.attr(id, "src"))
            .collect();
        assert_eq!(icons, vec!["icons/reno.svg", "s2.svg"]);
    }

    #[test]
    fn test_extra_cards_are_dropped() {
        let record = frontmatter::parse(
            r#"---
service_cards: [{"title": "A"}, {"title": "B"}, {"title": "C"}]
---"#,
        );
        let mut page = Page::parse(HTML);
        render(&record, &mut page, &RenderOptions::default()).unwrap();

        assert_eq!(texts(&page, ".service-card .box-title a"), vec!["A", "B"]);
        // Missing fields keep the placeholder content
        assert_eq!(texts(&page, ".service-card .box-text"), vec!["First", "Second"]);
    }

    #[test]
    fn test_without_cards_is_noop() {
        let record = frontmatter::parse("---\ntitle: Ignored\n---");
        let mut page = Page::parse(HTML);
        let before = page.to_html();
        render(&record, &mut page, &RenderOptions::default()).unwrap();
        assert_eq!(page.to_html(), before);
    }
}
