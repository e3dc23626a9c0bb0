use crate::{ModelError, ModelResult};
use serde::Serialize;
use storyline_types::{ContentMap, DynamicValue};

/// A referenced content unit ("relation") delivered alongside a story.
///
/// Wire shape: `{"uuid": ..., "slug": ..., "content": {...}, ...}`; other
/// keys are ignored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entity {
    pub id: String,
    pub content: ContentMap,
    pub path: String,
}

impl Entity {
    pub fn new(id: impl Into<String>, content: ContentMap, path: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content,
            path: path.into(),
        }
    }

    /// Decodes one element of a `rels` array.
    pub fn decode(value: &DynamicValue) -> ModelResult<Self> {
        Self::decode_fields(value).map_err(ModelError::decoding("relation"))
    }

    fn decode_fields(value: &DynamicValue) -> storyline_types::Result<Self> {
        let fields = ContentMap::decode(value)?;
        Ok(Self {
            id: fields.required_str("uuid")?.to_owned(),
            content: ContentMap::new(fields.required_object("content")?.clone()),
            path: fields.required_str("slug")?.to_owned(),
        })
    }

    /// Extract a string value from `content`.
    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.content.get(field).and_then(DynamicValue::as_str)
    }
}
