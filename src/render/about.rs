//! `about`: section heading, profile card and signature

use crate::content::ContentRecord;
use crate::page::{Page, PageError};

use super::RenderOptions;

const TITLE: &str = "#about-sec .sec-title";
const DESCRIPTION: &str = "#about-sec .sec-text";
const PROFILE_NAME: &str = ".about-profile-name";
const PROFILE_TITLE: &str = ".about-profile .desig";
const PROFILE_IMAGE: &str = ".about-profile .avatar img";
const SIGNATURE_IMAGE: &str = ".signature img";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct About {
    pub title: Option<String>,
    pub description: Option<String>,
    pub profile_name: Option<String>,
    pub profile_title: Option<String>,
    pub profile_image: Option<String>,
    pub signature_image: Option<String>,
}

impl About {
    pub fn from_record(record: &ContentRecord) -> Self {
        Self {
            title: record.text("title"),
            description: record.text("description"),
            profile_name: record.text("profile_name"),
            profile_title: record.text("profile_title"),
            profile_image: record.text("profile_image"),
            signature_image: record.text("signature_image"),
        }
    }
}

pub fn render(
    record: &ContentRecord,
    page: &mut Page,
    _options: &RenderOptions,
) -> Result<(), PageError> {
    let about = About::from_record(record);

    page.fill_text(TITLE, about.title.as_deref())?;
    page.fill_text(DESCRIPTION, about.description.as_deref())?;
    page.fill_text(PROFILE_NAME, about.profile_name.as_deref())?;
    page.fill_text(PROFILE_TITLE, about.profile_title.as_deref())?;
    page.fill_attr(PROFILE_IMAGE, "src", about.profile_image.as_deref())?;
    page.fill_attr(SIGNATURE_IMAGE, "src", about.signature_image.as_deref())?;

    Ok(())
}
