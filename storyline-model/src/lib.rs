//! Story-level model for Storyline.
//!
//! Defines the typed shapes decoded from content API responses:
//! - [`Story`] / [`StoryResponse`] / [`MultipleStoriesResponse`]: primary payloads
//! - [`Entity`]: a referenced content unit delivered in `rels`
//! - [`Asset`], [`ArticleCard`], [`ArticleBlock`]: shapes built from story content
//! - [`Link`] / [`LinksResponse`]: the site tree
//!
//! Only a story's own required fields fail a decode. Relations, listed
//! stories and links are decoded one by one and malformed entries are skipped.

mod article;
mod asset;
mod entity;
mod error;
mod link;
mod story;

pub use article::{ArticleBlock, ArticleCard};
pub use asset::{Asset, AssetExt};
pub use entity::Entity;
pub use error::{ModelError, ModelResult};
pub use link::{Link, LinksResponse};
pub use story::{MultipleStoriesResponse, Story, StoryResponse};
