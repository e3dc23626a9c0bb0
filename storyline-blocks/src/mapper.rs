use crate::block::{ArticlesBlock, BigTextBlock, Block, HeroBlock, ResolveRelations, SectionBlock};
use crate::{BlockError, Result};
use storyline_resolve::RelationResolver;
use storyline_types::{ContentMap, DynamicValue};
use tracing::warn;

/// Decodes raw block content into [`Block`] values.
///
/// The discriminator-to-type table is a fixed `match`, independent of any
/// renderer registry. With a resolver attached, relation-bearing blocks come
/// back with their references expanded.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlockMapper<'a> {
    resolver: Option<&'a RelationResolver>,
}

impl<'a> BlockMapper<'a> {
    pub fn new() -> Self {
        Self { resolver: None }
    }

    pub fn with_resolver(resolver: &'a RelationResolver) -> Self {
        Self {
            resolver: Some(resolver),
        }
    }

    /// Decodes `content` as the block type named by `component`.
    pub fn decode(&self, content: &ContentMap, component: &str) -> Result<Block> {
        let decoded = match component {
            "hero" => HeroBlock::decode(content, component).map(Block::Hero),
            "popular-articles" | "all-articles" => {
                ArticlesBlock::decode(content, component).map(Block::Articles)
            }
            "big_text" => BigTextBlock::decode(content, component).map(Block::BigText),
            "section" => SectionBlock::decode(content, component).map(Block::Section),
            other => return Err(BlockError::UnknownDiscriminator(other.to_string())),
        };

        let block = decoded.map_err(|source| BlockError::Decode {
            component: component.to_string(),
            source,
        })?;

        Ok(match self.resolver {
            Some(resolver) => block.resolve_relations(resolver),
            None => block,
        })
    }

    /// Decodes one block object, reading its `"component"` field.
    pub fn map(&self, value: &DynamicValue) -> Result<Block> {
        let fields = value
            .as_object()
            .ok_or(BlockError::NotAnObject { found: value.kind() })?;
        let component = fields
            .get("component")
            .and_then(DynamicValue::as_str)
            .ok_or(BlockError::MissingDiscriminator)?;

        self.decode(&ContentMap::new(fields.clone()), component)
    }

    /// Decodes every element, dropping the ones that fail.
    pub fn map_all(&self, values: &[DynamicValue]) -> Vec<Block> {
        values
            .iter()
            .filter_map(|value| match self.map(value) {
                Ok(block) => Some(block),
                Err(BlockError::UnknownDiscriminator(component)) => {
                    warn!(component = %component, "Unhandled block type");
                    None
                }
                Err(e) => {
                    warn!(error = %e, "Skipping malformed block");
                    None
                }
            })
            .collect()
    }
}

/// Block accessor for dynamic values.
pub trait BlockExt {
    /// Decodes the value as a block without relation resolution.
    fn as_block(&self) -> Option<Block>;
}

impl BlockExt for DynamicValue {
    fn as_block(&self) -> Option<Block> {
        BlockMapper::new().map(self).ok()
    }
}
