//! `testimonials`: heading and the testimonial slider, rebuilt from scratch

use serde_json::Value;

use crate::content::ContentRecord;
use crate::helpers::escape_or_empty;
use crate::page::{Page, PageError};

use super::view::{items, Item};
use super::RenderOptions;

const TITLE: &str = ".testi-sec-1 .sec-title";
const SLIDER: &str = "#testiSlider1 .swiper-wrapper";
const AVATAR_MASK: &str = "assets/img/shape/testi_1_1-mask.png";
const QUOTE_ICON: &str = "assets/img/icon/qoute.svg";
const STAR: &str = r#"<i class="fa-sharp fa-solid fa-star"></i>"#;

pub const DEFAULT_RATING: usize = 5;
pub const MAX_RATING: usize = 10;

/// Number of stars for a raw rating value.
///
/// Numbers and numeric strings are truncated; anything absent, non-numeric
/// or not positive falls back to [`DEFAULT_RATING`]. Ratings above
/// [`MAX_RATING`] render [`MAX_RATING`] stars rather than one star per unit.
pub fn star_count(rating: Option<&Value>) -> usize {
    let value = match rating {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    match value {
        Some(v) if v.is_finite() && v >= 1.0 => (v.trunc() as usize).min(MAX_RATING),
        _ => DEFAULT_RATING,
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Testimonial {
    pub stars: usize,
    pub quote: Option<String>,
    pub image: Option<String>,
    pub name: Option<String>,
    pub position: Option<String>,
}

impl Testimonial {
    fn from_item(item: &Item<'_>) -> Self {
        Self {
            stars: star_count(item.get("rating")),
            quote: item.text("quote"),
            image: item.text("image"),
            name: item.text("name"),
            position: item.text("position"),
        }
    }

    fn to_html(&self) -> String {
        format!(
            r#"<div class="swiper-slide">
    <div class="testi-card">
        <div class="testi-grid_review">{stars}</div>
        <p class="testi-card_text">"{quote}"</p>
        <div class="testi-grid-wrap">
            <div class="testi-card_profile">
                <div class="avatar" data-mask-src="{mask}">
                    <img src="{image}" alt="avatar">
                </div>
                <div class="testi-card_profile-details">
                    <h3 class="testi-card_name">{name}</h3>
                    <span class="testi-card_desig">{position}</span>
                </div>
            </div>
            <div class="quote-icon">
                <img src="{quote_icon}" alt="icon">
            </div>
        </div>
    </div>
</div>"#,
            stars = STAR.repeat(self.stars),
            quote = escape_or_empty(self.quote.as_deref()),
            mask = AVATAR_MASK,
            image = escape_or_empty(self.image.as_deref()),
            name = escape_or_empty(self.name.as_deref()),
            position = escape_or_empty(self.position.as_deref()),
            quote_icon = QUOTE_ICON,
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Testimonials {
    pub title: Option<String>,
    pub entries: Vec<Testimonial>,
}

impl Testimonials {
    /// `None` when the record has no `testimonials` list
    pub fn from_record(record: &ContentRecord) -> Option<Self> {
        let entries = items(record, "testimonials")?
            .iter()
            .map(Testimonial::from_item)
            .collect();
        Some(Self {
            title: record.text("title"),
            entries,
        })
    }
}

pub fn render(
    record: &ContentRecord,
    page: &mut Page,
    _options: &RenderOptions,
) -> Result<(), PageError> {
    let Some(testimonials) = Testimonials::from_record(record) else {
        return Ok(());
    };

    page.fill_text(TITLE, testimonials.title.as_deref())?;

    let Some(slider) = page.select_first(SLIDER)? else {
        return Ok(());
    };
    page.clear_children(slider);
    for entry in &testimonials.entries {
        page.append_html(slider, &entry.to_html());
    }

    Ok(())
}
