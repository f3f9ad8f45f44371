//! Content module - post records, the content source and markdown rendering

mod frontmatter;
pub mod loader;
mod markdown;
mod post;
pub mod source;

pub use frontmatter::FrontMatter;
pub use loader::ContentLoader;
pub use markdown::MarkdownRenderer;
pub use post::PostRecord;
pub use source::{MemorySource, PostSource};
