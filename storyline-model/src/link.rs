use crate::{ModelError, ModelResult};
use serde::Serialize;
use std::collections::BTreeMap;
use storyline_types::{ContentMap, DynamicValue};
use tracing::warn;

/// One node of the site tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub id: i64,
    pub uuid: String,
    pub slug: String,
    pub path: Option<String>,
    pub parent_id: Option<i64>,
    pub name: String,
    pub is_folder: bool,
    pub published: bool,
    pub is_startpage: bool,
    pub position: i64,
    pub real_path: Option<String>,
}

impl Link {
    pub fn decode(value: &DynamicValue) -> ModelResult<Self> {
        Self::decode_fields(value).map_err(ModelError::decoding("link"))
    }

    fn decode_fields(value: &DynamicValue) -> storyline_types::Result<Self> {
        let fields = ContentMap::decode(value)?;
        Ok(Self {
            id: fields.required_int("id")?,
            uuid: fields.required_str("uuid")?.to_owned(),
            slug: fields.required_str("slug")?.to_owned(),
            path: fields.optional_str("path")?.map(str::to_owned),
            parent_id: fields.optional_int("parent_id")?,
            name: fields.required_str("name")?.to_owned(),
            is_folder: fields.required_bool("is_folder")?,
            published: fields.required_bool("published")?,
            is_startpage: fields.required_bool("is_startpage")?,
            position: fields.required_int("position")?,
            real_path: fields.optional_str("real_path")?.map(str::to_owned),
        })
    }
}

/// The links payload: `{"links": {"<uuid>": {...}, ...}}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LinksResponse {
    pub links: BTreeMap<String, Link>,
}

impl LinksResponse {
    pub fn from_slice(bytes: &[u8]) -> ModelResult<Self> {
        let value =
            DynamicValue::from_slice(bytes).map_err(ModelError::decoding("links response"))?;
        Self::decode(&value)
    }

    /// Decodes the map. A link that fails to decode is skipped.
    pub fn decode(value: &DynamicValue) -> ModelResult<Self> {
        let fields = ContentMap::decode(value).map_err(ModelError::decoding("links response"))?;
        let raw = fields
            .required_object("links")
            .map_err(ModelError::decoding("links response"))?;

        let mut links = BTreeMap::new();
        for (key, item) in raw {
            match Link::decode(item) {
                Ok(link) => {
                    links.insert(key.clone(), link);
                }
                Err(e) => warn!(key = %key, error = %e, "Skipping malformed link"),
            }
        }
        Ok(Self { links })
    }

    /// Links ordered for display: by parent, then position, then slug.
    pub fn ordered(&self) -> Vec<&Link> {
        let mut out: Vec<&Link> = self.links.values().collect();
        out.sort_by(|a, b| {
            a.parent_id
                .cmp(&b.parent_id)
                .then(a.position.cmp(&b.position))
                .then_with(|| a.slug.cmp(&b.slug))
        });
        out
    }

    pub fn children_of(&self, parent_id: i64) -> impl Iterator<Item = &Link> {
        self.links
            .values()
            .filter(move |link| link.parent_id == Some(parent_id))
    }
}
