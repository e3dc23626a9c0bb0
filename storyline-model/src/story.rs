use crate::{Entity, ModelError, ModelResult};
use serde::Serialize;
use storyline_types::{ContentMap, DynamicValue};
use tracing::warn;

/// One published page or article.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Story {
    pub uuid: String,
    pub name: String,
    pub slug: String,
    pub full_slug: String,
    pub content: ContentMap,
    pub created_at: String,
    pub published_at: Option<String>,
    pub updated_at: Option<String>,
    pub is_startpage: bool,
}

impl Story {
    /// Decodes a story object. Every field except the timestamps after
    /// `created_at` and `is_startpage` is required.
    pub fn decode(value: &DynamicValue) -> ModelResult<Self> {
        Self::decode_fields(value).map_err(ModelError::decoding("story"))
    }

    fn decode_fields(value: &DynamicValue) -> storyline_types::Result<Self> {
        let fields = ContentMap::decode(value)?;
        Ok(Self {
            uuid: fields.required_str("uuid")?.to_owned(),
            name: fields.required_str("name")?.to_owned(),
            slug: fields.required_str("slug")?.to_owned(),
            full_slug: fields.required_str("full_slug")?.to_owned(),
            content: ContentMap::new(fields.required_object("content")?.clone()),
            created_at: fields.required_str("created_at")?.to_owned(),
            published_at: fields.optional_str("published_at")?.map(str::to_owned),
            updated_at: fields.optional_str("updated_at")?.map(str::to_owned),
            is_startpage: fields.optional_bool("is_startpage")?.unwrap_or(false),
        })
    }

    /// The story's content-type discriminator, if present.
    pub fn component(&self) -> Option<&str> {
        self.content.get("component").and_then(DynamicValue::as_str)
    }
}

/// The single-story payload: `{"story": {...}, "cv": ..., "rels": [...]}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoryResponse {
    pub story: Story,
    pub cv: Option<i64>,
    pub rels: Vec<Entity>,
}

impl StoryResponse {
    pub fn from_slice(bytes: &[u8]) -> ModelResult<Self> {
        let value =
            DynamicValue::from_slice(bytes).map_err(ModelError::decoding("story response"))?;
        Self::decode(&value)
    }

    pub fn decode(value: &DynamicValue) -> ModelResult<Self> {
        let fields = ContentMap::decode(value).map_err(ModelError::decoding("story response"))?;
        let story = fields
            .required("story")
            .map_err(ModelError::decoding("story response"))?;

        Ok(Self {
            story: Story::decode(story)?,
            cv: fields.get("cv").and_then(DynamicValue::as_int),
            rels: decode_relations(&fields),
        })
    }
}

/// The list payload: `{"stories": [...], "cv": ..., "rels": [...]}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MultipleStoriesResponse {
    pub stories: Vec<Story>,
    pub cv: Option<i64>,
    pub rels: Vec<Entity>,
}

impl MultipleStoriesResponse {
    pub fn from_slice(bytes: &[u8]) -> ModelResult<Self> {
        let value =
            DynamicValue::from_slice(bytes).map_err(ModelError::decoding("stories response"))?;
        Self::decode(&value)
    }

    /// Decodes the list. A story that fails to decode is skipped.
    pub fn decode(value: &DynamicValue) -> ModelResult<Self> {
        let fields = ContentMap::decode(value).map_err(ModelError::decoding("stories response"))?;
        let stories = fields
            .required_array("stories")
            .map_err(ModelError::decoding("stories response"))?
            .iter()
            .filter_map(|raw| match Story::decode(raw) {
                Ok(story) => Some(story),
                Err(e) => {
                    warn!(error = %e, "Skipping malformed story");
                    None
                }
            })
            .collect();

        Ok(Self {
            stories,
            cv: fields.get("cv").and_then(DynamicValue::as_int),
            rels: decode_relations(&fields),
        })
    }
}

fn decode_relations(fields: &ContentMap) -> Vec<Entity> {
    let Some(raw) = fields.get("rels") else {
        return Vec::new();
    };
    let Some(items) = raw.as_array() else {
        if !raw.is_null() {
            warn!(found = raw.kind(), "Ignoring non-array rels");
        }
        return Vec::new();
    };

    items
        .iter()
        .filter_map(|item| match Entity::decode(item) {
            Ok(entity) => Some(entity),
            Err(e) => {
                warn!(error = %e, "Skipping malformed relation");
                None
            }
        })
        .collect()
}
