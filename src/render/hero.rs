//! `hero-slides`: the hero slider, rebuilt from scratch on every render

use crate::content::ContentRecord;
use crate::helpers::escape_or_empty;
use crate::page::{Page, PageError};

use super::view::{items, Item};
use super::RenderOptions;

const SLIDER: &str = "#heroSlide1 .swiper-wrapper";
const MASK_IMAGE: &str = "assets/img/hero/hero_1_bg_mask.png";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeroSlide {
    pub background_image: Option<String>,
    pub subtitle: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub button1_text: Option<String>,
    pub button1_link: Option<String>,
    pub button2_text: Option<String>,
    pub button2_link: Option<String>,
}

impl HeroSlide {
    fn from_item(item: &Item<'_>) -> Self {
        Self {
            background_image: item.text("background_image"),
            subtitle: item.text("subtitle"),
            title: item.text("title"),
            description: item.text("description"),
            button1_text: item.text("button1_text"),
            button1_link: item.text("button1_link"),
            button2_text: item.text("button2_text"),
            button2_link: item.text("button2_link"),
        }
    }

    /// Markup for this slide at `index` of `total`
    fn to_html(&self, index: usize, total: usize) -> String {
        format!(
            r#"<div class="swiper-slide" role="group" aria-label="{position} / {total}">
    <div class="hero-inner bg-mask" style="mask-image: url('{mask}');">
        <div class="th-hero-bg background-image" style="background-image: url('{background}');"></div>
        <div class="hero-big-text">{subtitle}</div>
        <div class="container">
            <div class="row align-items-center">
                <div class="col-lg-9">
                    <div class="hero-style1">
                        <h1 class="hero-title text-white">
                            <span class="title1 slideindown" data-ani="slideindown" data-ani-delay="0.3s" style="animation-delay: 0.3s;">{title}</span>
                        </h1>
                        <p class="hero-text text-white slideinup txt-cap" data-ani="slideinup" data-ani-delay="0.5s" style="animation-delay: 0.5s;">{description}</p>
                        <a href="{button1_link}" class="th-btn th-btn-icon style-border3 slideinup" data-ani="slideinup" data-ani-delay="0.6s" style="animation-delay: 0.6s;">{button1_text}</a>
                        <a href="{button2_link}" class="th-btn slideinup" data-ani="slideinup" data-ani-delay="0.6s" style="animation-delay: 0.6s;">{button2_text} <span class="fab fa-whatsapp"></span></a>
                    </div>
                </div>
            </div>
        </div>
    </div>
</div>"#,
            position = index + 1,
            total = total,
            mask = MASK_IMAGE,
            background = escape_or_empty(self.background_image.as_deref()),
            subtitle = escape_or_empty(self.subtitle.as_deref()),
            title = escape_or_empty(self.title.as_deref()),
            description = escape_or_empty(self.description.as_deref()),
            button1_link = escape_or_empty(self.button1_link.as_deref()),
            button1_text = escape_or_empty(self.button1_text.as_deref()),
            button2_link = escape_or_empty(self.button2_link.as_deref()),
            button2_text = escape_or_empty(self.button2_text.as_deref()),
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Hero {
    pub slides: Vec<HeroSlide>,
}

impl Hero {
    /// `None` when the record has no `slides` list
    pub fn from_record(record: &ContentRecord) -> Option<Self> {
        let slides = items(record, "slides")?
            .iter()
            .map(HeroSlide::from_item)
            .collect();
        Some(Self { slides })
    }
}

pub fn render(
    record: &ContentRecord,
    page: &mut Page,
    _options: &RenderOptions,
) -> Result<(), PageError> {
    let Some(hero) = Hero::from_record(record) else {
        return Ok(());
    };
    let Some(slider) = page.select_first(SLIDER)? else {
        return Ok(());
    };

    page.clear_children(slider);
    let total = hero.slides.len();
    for (index, slide) in hero.slides.iter().enumerate() {
        page.append_html(slider, &slide.to_html(index, total));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::frontmatter;

    const HTML: &str = r#"<html><body>
<div id="heroSlide1"><div class="swiper-wrapper">
<div class="swiper-slide"><h1 class="hero-title">Placeholder one</h1></div>
<div class="swiper-slide"><h1 class="hero-title">Placeholder two</h1></div>
<div class="swiper-slide"><h1 class="hero-title">Placeholder three</h1></div>
</div></div></body></html>"#;

    #[test]
    fn test_rebuilds_slides() {
        let record = frontmatter::parse(
            r##"---
slides: [{"title": "Build <better>", "subtitle": "HOMES", "background_image": "img/1.jpg", "button1_text": "Projects", "button1_link": "#projects"}, {"title": "Second"}]
---"##,
        );
        let mut page = Page::parse(HTML);
        render(&record, &mut page, &RenderOptions::default()).unwrap();

        let slider = page.select_first(SLIDER).unwrap().unwrap();
        assert_eq!(page.child_element_count(slider), 2);

        let titles = page.select_all("#heroSlide1 .hero-title .title1").unwrap();
        assert_eq!(titles.len(), 2);
        assert_eq!(page.text(titles[0]), Some("Build <better>".to_string()));
        assert_eq!(page.text(titles[1]), Some("Second".to_string()));

        let slides = page.select_all("#heroSlide1 .swiper-slide").unwrap();
        assert_eq!(page.attr(slides[1], "aria-label"), Some("2 / 2".to_string()));

        let bg = page.select_first(".th-hero-bg").unwrap().unwrap();
        assert_eq!(
            page.attr(bg, "style"),
            Some("background-image: url('img/1.jpg');".to_string())
        );
        let button = page.select_first(".th-btn-icon").unwrap().unwrap();
        assert_eq!(page.attr(button, "href"), Some("#projects".to_string()));
        assert!(!page.to_html().contains("Placeholder"));
    }

    #[test]
    fn test_missing_slide_fields_render_empty() {
        let record = frontmatter::parse("---\nslides: [{}]\n---");
        let mut page = Page::parse(HTML);
        render(&record, &mut page, &RenderOptions::default()).unwrap();

        let title = page.select_first(".title1").unwrap().unwrap();
        assert_eq!(page.text(title), Some(String::new()));
        assert!(!page.to_html().contains("undefined"));
    }

    #[test]
    fn test_without_slides_is_noop() {
        let record = frontmatter::parse("---\ntitle: No slides\n---");
        let mut page = Page::parse(HTML);
        render(&record, &mut page, &RenderOptions::default()).unwrap();

        let slider = page.select_first(SLIDER).unwrap().unwrap();
        assert_eq!(page.child_element_count(slider), 3);
    }
}
