//! Block variants.
//!
//! The set is closed: each `"component"` value the site uses maps to one
//! struct here, and [`Block`] is the sum over them. Renderers that only care
//! about one variant narrow with [`BlockVariant`].

use serde::Serialize;
use storyline_model::{ArticleCard, Asset, AssetExt};
use storyline_resolve::RelationResolver;
use storyline_richtext::{RichTextExt, RichTextNode};
use storyline_types::{ContentMap, DynamicValue};
use tracing::debug;

use crate::BlockMapper;

/// Full-width banner at the top of a page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeroBlock {
    pub uid: String,
    pub component: String,
    pub layout: String,
    pub headline: String,
    pub subheadline: Option<String>,
    pub background_image: Option<Asset>,
}

impl HeroBlock {
    pub(crate) fn decode(content: &ContentMap, component: &str) -> storyline_types::Result<Self> {
        Ok(Self {
            uid: content.required_str("_uid")?.to_owned(),
            component: component.to_owned(),
            layout: content.required_str("layout")?.to_owned(),
            headline: content.required_str("headline")?.to_owned(),
            subheadline: content.optional_str("subheadline")?.map(str::to_owned),
            background_image: content.get("background_image").and_then(DynamicValue::as_asset),
        })
    }
}

/// A list of referenced articles (`popular-articles`, `all-articles`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArticlesBlock {
    pub uid: String,
    pub component: String,
    pub headline: String,
    /// Article identifiers as stored in the story.
    pub articles: Vec<String>,
    /// Cards for the identifiers a resolver could expand.
    pub resolved_articles: Option<Vec<ArticleCard>>,
}

impl ArticlesBlock {
    pub(crate) fn decode(content: &ContentMap, component: &str) -> storyline_types::Result<Self> {
        let articles = content
            .required_array("articles")?
            .iter()
            .filter_map(DynamicValue::as_str)
            .map(str::to_owned)
            .collect();

        Ok(Self {
            uid: content.required_str("_uid")?.to_owned(),
            component: component.to_owned(),
            headline: content.required_str("headline")?.to_owned(),
            articles,
            resolved_articles: None,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BigTextBlock {
    pub uid: String,
    pub component: String,
    pub text: Option<Vec<RichTextNode>>,
}

impl BigTextBlock {
    pub(crate) fn decode(content: &ContentMap, component: &str) -> storyline_types::Result<Self> {
        Ok(Self {
            uid: content.required_str("_uid")?.to_owned(),
            component: component.to_owned(),
            text: content
                .get("text")
                .and_then(DynamicValue::as_rich_text_document),
        })
    }
}

/// A titled group of nested blocks.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionBlock {
    pub uid: String,
    pub component: String,
    pub headline: Option<String>,
    pub body: Vec<Block>,
}

impl SectionBlock {
    pub(crate) fn decode(content: &ContentMap, component: &str) -> storyline_types::Result<Self> {
        let body = content
            .optional_array("body")?
            .map(|items| BlockMapper::new().map_all(items))
            .unwrap_or_default();

        Ok(Self {
            uid: content.required_str("_uid")?.to_owned(),
            component: component.to_owned(),
            headline: content.optional_str("headline")?.map(str::to_owned),
            body,
        })
    }
}

/// Any decoded block.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Block {
    Hero(HeroBlock),
    Articles(ArticlesBlock),
    BigText(BigTextBlock),
    Section(SectionBlock),
}

impl Block {
    /// The discriminator this block was decoded from.
    pub fn component(&self) -> &str {
        match self {
            Self::Hero(b) => &b.component,
            Self::Articles(b) => &b.component,
            Self::BigText(b) => &b.component,
            Self::Section(b) => &b.component,
        }
    }

    pub fn uid(&self) -> &str {
        match self {
            Self::Hero(b) => &b.uid,
            Self::Articles(b) => &b.uid,
            Self::BigText(b) => &b.uid,
            Self::Section(b) => &b.uid,
        }
    }

    pub fn as_variant<T: BlockVariant>(&self) -> Option<&T> {
        T::narrow(self)
    }
}

/// A concrete block type that can be narrowed out of [`Block`].
pub trait BlockVariant {
    fn narrow(block: &Block) -> Option<&Self>;
}

impl BlockVariant for HeroBlock {
    fn narrow(block: &Block) -> Option<&Self> {
        match block {
            Block::Hero(b) => Some(b),
            _ => None,
        }
    }
}

impl BlockVariant for ArticlesBlock {
    fn narrow(block: &Block) -> Option<&Self> {
        match block {
            Block::Articles(b) => Some(b),
            _ => None,
        }
    }
}

impl BlockVariant for BigTextBlock {
    fn narrow(block: &Block) -> Option<&Self> {
        match block {
            Block::BigText(b) => Some(b),
            _ => None,
        }
    }
}

impl BlockVariant for SectionBlock {
    fn narrow(block: &Block) -> Option<&Self> {
        match block {
            Block::Section(b) => Some(b),
            _ => None,
        }
    }
}

/// Blocks that reference other content by identifier.
pub trait ResolveRelations: Sized {
    /// Returns a copy with references expanded through `resolver`.
    #[must_use]
    fn resolve_relations(self, resolver: &RelationResolver) -> Self;
}

impl ResolveRelations for ArticlesBlock {
    fn resolve_relations(self, resolver: &RelationResolver) -> Self {
        let cards = self
            .articles
            .iter()
            .filter_map(|id| match resolver.resolve(&DynamicValue::from(id.as_str())) {
                DynamicValue::Object(content) => {
                    Some(ArticleCard::from_resolved(id, &content, resolver.slug_field()))
                }
                _ => {
                    debug!(id = %id, "Article reference not resolved");
                    None
                }
            })
            .collect();

        Self {
            resolved_articles: Some(cards),
            ..self
        }
    }
}

impl ResolveRelations for SectionBlock {
    fn resolve_relations(self, resolver: &RelationResolver) -> Self {
        Self {
            body: self
                .body
                .into_iter()
                .map(|block| block.resolve_relations(resolver))
                .collect(),
            ..self
        }
    }
}

impl ResolveRelations for Block {
    fn resolve_relations(self, resolver: &RelationResolver) -> Self {
        match self {
            Self::Articles(b) => Self::Articles(b.resolve_relations(resolver)),
            Self::Section(b) => Self::Section(b.resolve_relations(resolver)),
            Self::Hero(_) | Self::BigText(_) => self,
        }
    }
}
