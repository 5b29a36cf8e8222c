//! `footer`: about text, copyright, social links and the footer menu

use crate::content::ContentRecord;
use crate::page::{Page, PageError};

use super::view::{items, object, Item};
use super::RenderOptions;

const DESCRIPTION: &str = ".footer-widget .about-text";
const COPYRIGHT: &str = ".copyright-text";
const INSTAGRAM: &str = r#".th-social a[href*="instagram"]"#;
const FACEBOOK: &str = r#".th-social a[href*="facebook"]"#;
const FOOTER_LINKS: &str = ".footer-links ul li a";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FooterLink {
    pub text: Option<String>,
    pub link: Option<String>,
}

impl FooterLink {
    fn from_item(item: &Item<'_>) -> Self {
        Self {
            text: item.text("text"),
            link: item.text("link"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Footer {
    pub description: Option<String>,
    /// Markup, inserted as-is
    pub copyright: Option<String>,
    pub instagram: Option<String>,
    pub facebook: Option<String>,
    pub links: Vec<FooterLink>,
}

impl Footer {
    pub fn from_record(record: &ContentRecord) -> Self {
        let social = object(record, "social_links");
        let links = items(record, "footer_links")
            .unwrap_or_default()
            .iter()
            .map(FooterLink::from_item)
            .collect();

        Self {
            description: record.text("description"),
            copyright: record.text("copyright"),
            instagram: social.text("instagram"),
            facebook: social.text("facebook"),
            links,
        }
    }
}

pub fn render(
    record: &ContentRecord,
    page: &mut Page,
    _options: &RenderOptions,
) -> Result<(), PageError> {
    let footer = Footer::from_record(record);

    page.fill_text(DESCRIPTION, footer.description.as_deref())?;

    if let (Some(id), Some(copyright)) = (page.select_first(COPYRIGHT)?, &footer.copyright) {
        page.set_inner_html(id, copyright);
    }

    page.fill_attr(INSTAGRAM, "href", footer.instagram.as_deref())?;
    page.fill_attr(FACEBOOK, "href", footer.facebook.as_deref())?;

    let anchors = page.select_all(FOOTER_LINKS)?;
    for (link, id) in footer.links.iter().zip(anchors) {
        if let Some(text) = &link.text {
            page.set_text(id, text);
        }
        if let Some(href) = &link.link {
            page.set_attr(id, "href", href);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::frontmatter;

    const HTML: &str = r##"<html><body><footer>
<div class="footer-widget"><p class="about-text">Old about</p>
<div class="th-social"><a href="https://facebook.com/old"></a><a href="https://instagram.com/old"></a></div></div>
<div class="footer-links"><ul><li><a href="#1">One</a></li><li><a href="#2">Two</a></li></ul></div>
<p class="copyright-text">Old copyright</p>
</footer></body></html>"##;

    fn href(page: &Page, selector: &str) -> String {
        let id = page.select_first(selector).unwrap().unwrap();
        page.attr(id, "href").unwrap()
    }

    #[test]
    fn test_render_footer() {
        let record = frontmatter::parse(
            r##"---
description: Building since 1990 <always>
copyright: Copyright &copy; 2024 <a href="index.html">Acme</a>
social_links: {"instagram": "https://instagram.com/acme"}
footer_links: [{"text": "Home", "link": "#home"}, {"text": "Blog", "link": "#blog"}, {"text": "Extra"}]
---"##,
        );
        let mut page = Page::parse(HTML);
        render(&record, &mut page, &RenderOptions::default()).unwrap();

        let about = page.select_first(DESCRIPTION).unwrap().unwrap();
        assert_eq!(page.text(about), Some("Building since 1990 <always>".to_string()));

        let copyright = page.select_first(COPYRIGHT).unwrap().unwrap();
        assert_eq!(page.text(copyright), Some("Copyright © 2024 Acme".to_string()));
        assert!(page.select_first(".copyright-text a").unwrap().is_some());

        // A braced header value stays text, so there is no object to read
        assert_eq!(href(&page, INSTAGRAM), "https://instagram.com/old");

        let links: Vec<_> = page
            .select_all(FOOTER_LINKS)
            .unwrap()
            .into_iter()
            .map(|id| (page.text(id).unwrap(), page.attr(id, "href").unwrap()))
            .collect();
        assert_eq!(
            links,
            vec![
                ("Home".to_string(), "#home".to_string()),
                ("Blog".to_string(), "#blog".to_string()),
            ]
        );
    }

    #[test]
    fn test_social_links_object() {
        let mut record = frontmatter::parse("---\ndescription: x\n---");
        record.insert(
            "social_links",
            serde_json::json!({"instagram": "https://instagram.com/acme", "facebook": "https://facebook.com/acme"}),
        );
        let mut page = Page::parse(HTML);
        render(&record, &mut page, &RenderOptions::default()).unwrap();

        assert_eq!(href(&page, INSTAGRAM), "https://instagram.com/acme");
        assert_eq!(href(&page, FACEBOOK), "https://facebook.com/acme");
    }

    #[test]
    fn test_missing_social_links_leave_template() {
        let record = frontmatter::parse("---\ncopyright: plain\n---");
        let mut page = Page::parse(HTML);
        render(&record, &mut page, &RenderOptions::default()).unwrap();

        assert_eq!(href(&page, INSTAGRAM), "https://instagram.com/old");
        let copyright = page.select_first(COPYRIGHT).unwrap().unwrap();
        assert_eq!(page.text(copyright), Some("plain".to_string()));
    }
}
