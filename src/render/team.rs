//! `team`: section heading and the member slider, rebuilt from scratch

use crate::content::ContentRecord;
use crate::helpers::{escape_or_empty, html_escape, tel_url};
use crate::page::{Page, PageError};

use super::view::{items, Item};
use super::RenderOptions;

const TITLE: &str = "#team-sec .sec-title";
const DESCRIPTION: &str = "#team-sec .sec-text";
const SLIDER: &str = "#teamSlider1 .swiper-wrapper";
const MASK_IMAGE: &str = "assets/img/theme-img/team-shape1.png";
const PHONE_ICON: &str = "assets/img/icon/phone.svg";

/// Social networks in display order, with their icon class
const SOCIAL_ICONS: [(&str, &str); 4] = [
    ("facebook", "fab fa-facebook-f"),
    ("youtube", "fab fa-youtube"),
    ("instagram", "fab fa-instagram"),
    ("linkedin", "fab fa-linkedin-in"),
];

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SocialLinks {
    pub facebook: Option<String>,
    pub youtube: Option<String>,
    pub instagram: Option<String>,
    pub linkedin: Option<String>,
}

impl SocialLinks {
    fn from_item(item: &Item<'_>) -> Self {
        Self {
            facebook: item.text("facebook"),
            youtube: item.text("youtube"),
            instagram: item.text("instagram"),
            linkedin: item.text("linkedin"),
        }
    }

    fn get(&self, network: &str) -> Option<&str> {
        match network {
            "facebook" => self.facebook.as_deref(),
            "youtube" => self.youtube.as_deref(),
            "instagram" => self.instagram.as_deref(),
            "linkedin" => self.linkedin.as_deref(),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TeamMember {
    pub image: Option<String>,
    pub name: Option<String>,
    pub position: Option<String>,
    pub phone: Option<String>,
    pub social_links: SocialLinks,
}

impl TeamMember {
    fn from_item(item: &Item<'_>) -> Self {
        Self {
            image: item.text("image"),
            name: item.text("name"),
            position: item.text("position"),
            phone: item.text("phone"),
            social_links: SocialLinks::from_item(&item.object("social_links")),
        }
    }

    fn to_html(&self) -> String {
        let social: String = SOCIAL_ICONS
            .iter()
            .filter_map(|(network, icon)| {
                self.social_links.get(network).map(|href| {
                    format!(
                        r#"<a target="_blank" href="{}"><i class="{}"></i></a>"#,
                        html_escape(href),
                        icon
                    )
                })
            })
            .collect();

        format!(
            r#"<div class="swiper-slide">
    <div class="th-team team-card style6">
        <div class="img-wrap">
            <div class="team-img" data-mask-src="{mask}">
                <img src="{image}" alt="Team">
            </div>
        </div>
        <div class="team-card-content">
            <div class="media">
                <div class="media-left">
                    <h3 class="box-title"><a href="team-details.html">{name}</a></h3>
                    <span class="team-desig">{position}</span>
                </div>
                <div class="media-body">
                    <a class="icon-btn" href="{phone}">
                        <img src="{phone_icon}" alt="img">
                    </a>
                </div>
            </div>
            <div class="th-social">{social}</div>
        </div>
    </div>
</div>"#,
            mask = MASK_IMAGE,
            image = escape_or_empty(self.image.as_deref()),
            name = escape_or_empty(self.name.as_deref()),
            position = escape_or_empty(self.position.as_deref()),
            phone = html_escape(&tel_url(self.phone.as_deref().unwrap_or_default())),
            phone_icon = PHONE_ICON,
            social = social,
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Team {
    pub title: Option<String>,
    pub description: Option<String>,
    pub members: Vec<TeamMember>,
}

impl Team {
    /// `None` when the record has no `members` list
    pub fn from_record(record: &ContentRecord) -> Option<Self> {
        let members = items(record, "members")?
            .iter()
            .map(TeamMember::from_item)
            .collect();
        Some(Self {
            title: record.text("title"),
            description: record.text("description"),
            members,
        })
    }
}

pub fn render(
    record: &ContentRecord,
    page: &mut Page,
    _options: &RenderOptions,
) -> Result<(), PageError> {
    let Some(team) = Team::from_record(record) else {
        return Ok(());
    };

    page.fill_text(TITLE, team.title.as_deref())?;
    page.fill_text(DESCRIPTION, team.description.as_deref())?;

    let Some(slider) = page.select_first(SLIDER)? else {
        return Ok(());
    };
    page.clear_children(slider);
    for member in &team.members {
        page.append_html(slider, &member.to_html());
    }

    Ok(())
}
