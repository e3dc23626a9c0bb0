use crate::{Asset, AssetExt, Story};
use serde::Serialize;
use std::collections::BTreeMap;
use storyline_richtext::{RichTextExt, RichTextNode};
use storyline_types::DynamicValue;

const UNTITLED: &str = "No Title";

/// A teaser card for an article listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArticleCard {
    pub uuid: String,
    pub title: String,
    pub teaser: String,
    pub image: Option<Asset>,
    pub full_slug: String,
}

impl ArticleCard {
    /// Builds a card from the content of a resolved relation.
    ///
    /// `slug_field` is the reserved key the resolver wrote the entity path to.
    pub fn from_resolved(
        uuid: &str,
        content: &BTreeMap<String, DynamicValue>,
        slug_field: &str,
    ) -> Self {
        let text = |key: &str| {
            content
                .get(key)
                .and_then(DynamicValue::as_str)
                .unwrap_or_default()
                .to_owned()
        };

        Self {
            uuid: uuid.to_owned(),
            title: text("title"),
            teaser: text("teaser"),
            image: content.get("image").and_then(DynamicValue::as_asset),
            full_slug: text(slug_field),
        }
    }

    /// Builds a card from a listed story.
    pub fn from_story(story: &Story) -> Self {
        Self {
            uuid: story.uuid.clone(),
            title: story.content.str_or("title", UNTITLED).to_owned(),
            teaser: story.content.str_or("teaser", "").to_owned(),
            image: story.content.get("image").and_then(DynamicValue::as_asset),
            full_slug: story.full_slug.clone(),
        }
    }
}

/// A single article page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArticleBlock {
    pub title: String,
    pub teaser: String,
    pub image: Option<Asset>,
    pub content: Option<Vec<RichTextNode>>,
}

impl ArticleBlock {
    pub fn from_story(story: &Story) -> Self {
        Self {
            title: story.content.str_or("title", "").to_owned(),
            teaser: story.content.str_or("teaser", "").to_owned(),
            image: story.content.get("image").and_then(DynamicValue::as_asset),
            content: story
                .content
                .get("content")
                .and_then(DynamicValue::as_rich_text_document),
        }
    }
}
