//! Formatting helpers shared by the section renderers

mod date;
mod html;
mod url;

pub use date::*;
pub use html::*;
pub use url::*;
