//! Storyline content pipeline.
//!
//! Connects a [`ContentSource`] to the decoding layers: fetch a story,
//! decode it, build a resolver from its relations, map its body into blocks
//! and render each block through a caller-supplied registry.

pub mod config;
mod error;
pub mod page;
pub mod source;

pub use config::PipelineConfig;
pub use error::{PipelineError, Result};
pub use page::{
    Page, RenderedBlock, article_cards, load_article, load_article_cards, load_links, load_page,
    normalize_article, normalize_page,
};
pub use source::{ContentSource, FileSource, SourceError, StoryQuery};
