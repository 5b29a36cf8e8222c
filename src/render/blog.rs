//! `blog`: post card placeholders, patched by index

use crate::content::ContentRecord;
use crate::helpers::display_date;
use crate::page::{Page, PageError};

use super::view::{items, Item};
use super::RenderOptions;

const TITLE: &str = "#blog-sec .sec-title";
const CARDS: &str = ".blog-grid";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlogPost {
    pub title: Option<String>,
    pub excerpt: Option<String>,
    pub image: Option<String>,
    pub date: Option<String>,
}

impl BlogPost {
    fn from_item(item: &Item<'_>) -> Self {
        Self {
            title: item.text("title"),
            excerpt: item.text("excerpt"),
            image: item.text("image"),
            date: item.text("date"),
        }
    }

    /// Date as shown on the card, e.g. `March 5, 2024`
    pub fn display_date(&self) -> Option<String> {
        self.date.as_deref().and_then(display_date)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Blog {
    pub title: Option<String>,
    pub posts: Vec<BlogPost>,
}

impl Blog {
    /// `None` when the record has no `posts` list
    pub fn from_record(record: &ContentRecord) -> Option<Self> {
        let posts = items(record, "posts")?
            .iter()
            .map(BlogPost::from_item)
            .collect();
        Some(Self {
            title: record.text("title"),
            posts,
        })
    }
}

pub fn render(
    record: &ContentRecord,
    page: &mut Page,
    _options: &RenderOptions,
) -> Result<(), PageError> {
    let Some(blog) = Blog::from_record(record) else {
        return Ok(());
    };

    page.fill_text(TITLE, blog.title.as_deref())?;

    let placeholders = page.select_all(CARDS)?;
    for (post, scope) in blog.posts.iter().zip(placeholders) {
        page.fill_text_in(scope, ".box-title a", post.title.as_deref())?;
        page.fill_text_in(scope, ".blog-text", post.excerpt.as_deref())?;
        page.fill_attr_in(scope, ".blog-img img", "src", post.image.as_deref())?;
        page.fill_text_in(scope, ".blog-date", post.display_date().as_deref())?;
    }

    Ok(())
}
