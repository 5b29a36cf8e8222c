//! Content module - retrieval, front-matter decoding and the content store

pub mod frontmatter;
pub mod loader;
pub mod source;
mod store;
mod value;

pub use frontmatter::FrontMatter;
pub use loader::ContentLoader;
pub use source::{ContentSource, FetchError};
pub use store::{content_name, ContentStore};
pub use value::{json_text, scalar_text, ContentRecord, FieldValue};
