//! Page and article normalization.

use crate::config::PipelineConfig;
use crate::source::{ContentSource, StoryQuery};
use crate::Result;
use serde::Serialize;
use storyline_blocks::{BlockMapper, BlockRegistry};
use storyline_model::{
    ArticleBlock, ArticleCard, LinksResponse, MultipleStoriesResponse, StoryResponse,
};
use storyline_types::DynamicValue;
use tracing::{debug, warn};

/// One block after rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedBlock<V> {
    pub component: String,
    pub uid: String,
    pub view: V,
}

/// A story ready for the presentation layer.
///
/// A story with a block body fills `blocks`; a story without one is treated
/// as an article and fills `article`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<V> {
    pub name: String,
    pub slug: String,
    pub blocks: Vec<RenderedBlock<V>>,
    pub article: Option<ArticleBlock>,
}

/// Turns a decoded story response into a rendered page.
///
/// Blocks that fail to decode, or have no renderer, are dropped and logged.
pub fn normalize_page<V>(
    response: &StoryResponse,
    registry: &BlockRegistry<V>,
    config: &PipelineConfig,
) -> Page<V> {
    let story = &response.story;
    let resolver = config.resolver(response.rels.iter().cloned());
    let mapper = BlockMapper::with_resolver(&resolver);

    let body = story
        .content
        .get(&config.body_field)
        .and_then(DynamicValue::as_array);

    let (blocks, article) = match body {
        Some(values) => {
            let blocks = mapper
                .map_all(values)
                .into_iter()
                .filter_map(|block| {
                    let component = block.component().to_string();
                    if !registry.contains(&component) {
                        warn!(component = %component, "No renderer registered for block");
                        return None;
                    }
                    let view = registry.renderer(&component, &block)?;
                    Some(RenderedBlock {
                        uid: block.uid().to_string(),
                        component,
                        view,
                    })
                })
                .collect();
            (blocks, None)
        }
        None => {
            debug!(slug = %story.full_slug, "Story has no block body, rendering as article");
            (Vec::new(), Some(ArticleBlock::from_story(story)))
        }
    };

    Page {
        name: story.name.clone(),
        slug: story.full_slug.clone(),
        blocks,
        article,
    }
}

/// Fetches and normalizes the story at `path`.
pub fn load_page<S, V>(
    source: &S,
    path: &str,
    registry: &BlockRegistry<V>,
    config: &PipelineConfig,
) -> Result<Page<V>>
where
    S: ContentSource + ?Sized,
{
    let bytes = source.get_story(path, &config.resolve_relations)?;
    let response = StoryResponse::from_slice(&bytes)?;
    Ok(normalize_page(&response, registry, config))
}

pub fn normalize_article(response: &StoryResponse) -> ArticleBlock {
    ArticleBlock::from_story(&response.story)
}

/// Fetches an article by slug, adding the configured folder prefix.
pub fn load_article<S>(source: &S, slug: &str, config: &PipelineConfig) -> Result<ArticleBlock>
where
    S: ContentSource + ?Sized,
{
    let bytes = source.get_story(&config.article_path(slug), &[])?;
    let response = StoryResponse::from_slice(&bytes)?;
    Ok(normalize_article(&response))
}

/// Cards for the listed stories matching `query`.
pub fn article_cards(response: &MultipleStoriesResponse, query: &StoryQuery) -> Vec<ArticleCard> {
    response
        .stories
        .iter()
        .filter(|story| {
            query
                .starts_with
                .as_deref()
                .is_none_or(|prefix| story.full_slug.starts_with(prefix))
        })
        .filter(|story| !(query.exclude_startpages && story.is_startpage))
        .map(ArticleCard::from_story)
        .collect()
}

/// Fetches the article listing. `starts_with` defaults to the article prefix.
pub fn load_article_cards<S>(
    source: &S,
    starts_with: Option<&str>,
    config: &PipelineConfig,
) -> Result<Vec<ArticleCard>>
where
    S: ContentSource + ?Sized,
{
    let query = StoryQuery::starting_with(starts_with.unwrap_or(config.article_prefix.as_str()))
        .exclude_startpages();
    let bytes = source.get_stories(&query)?;
    let response = MultipleStoriesResponse::from_slice(&bytes)?;
    Ok(article_cards(&response, &query))
}

pub fn load_links<S>(source: &S) -> Result<LinksResponse>
where
    S: ContentSource + ?Sized,
{
    let bytes = source.get_links()?;
    Ok(LinksResponse::from_slice(&bytes)?)
}
