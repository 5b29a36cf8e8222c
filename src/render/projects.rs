//! `projects`: project card placeholders, patched by index

use crate::content::ContentRecord;
use crate::page::{Page, PageError};

use super::view::{items, Item};
use super::RenderOptions;

// Shared with the services section; the page has no projects heading anchor.
const TITLE: &str = "#service-sec .sec-title";
const CARDS: &str = ".property-card-wrap";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectItem {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub description: Option<String>,
    pub number: Option<String>,
    pub image: Option<String>,
}

impl ProjectItem {
    fn from_item(item: &Item<'_>) -> Self {
        Self {
            title: item.text("title"),
            subtitle: item.text("subtitle"),
            description: item.text("description"),
            number: item.text("number"),
            image: item.text("image"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Projects {
    pub title: Option<String>,
    pub items: Vec<ProjectItem>,
}

impl Projects {
    /// `None` when the record has no `project_items` list
    pub fn from_record(record: &ContentRecord) -> Option<Self> {
        let project_items = items(record, "project_items")?
            .iter()
            .map(ProjectItem::from_item)
            .collect();
        Some(Self {
            title: record.text("title"),
            items: project_items,
        })
    }
}

pub fn render(
    record: &ContentRecord,
    page: &mut Page,
    _options: &RenderOptions,
) -> Result<(), PageError> {
    let Some(projects) = Projects::from_record(record) else {
        return Ok(());
    };

    page.fill_text(TITLE, projects.title.as_deref())?;

    let placeholders = page.select_all(CARDS)?;
    for (project, scope) in projects.items.iter().zip(placeholders) {
        page.fill_text_in(scope, ".property-card-title a", project.title.as_deref())?;
        page.fill_text_in(scope, ".property-card-subtitle", project.subtitle.as_deref())?;
        page.fill_text_in(scope, ".property-card-text", project.description.as_deref())?;
        page.fill_text_in(scope, ".property-card-number", project.number.as_deref())?;
        page.fill_attr_in(scope, ".property-thumb img", "src", project.image.as_deref())?;
    }

    Ok(())
}
