//! Relation resolution.
//!
//! A story references other content units by identifier string. The API
//! ships those units in a side list (`rels`); [`RelationResolver`] indexes
//! them once and rewrites every matching string in a tree into the
//! referenced entity's content.
//!
//! Resolution is pure: the input tree is never touched and a new tree is
//! returned. An identifier already being expanded further up the tree is
//! left in place, so self and mutual references stop after one round.
//! Chains of distinct entities are cut at [`RelationResolver::max_depth`]
//! nested levels.

use std::collections::BTreeMap;
use std::collections::HashMap;
use storyline_model::Entity;
use storyline_types::{ContentMap, DynamicValue};
use tracing::{debug, warn};

/// Default bound on nested entity expansions.
pub const DEFAULT_MAX_DEPTH: usize = 4;

/// Default key the entity path is written to.
pub const DEFAULT_SLUG_FIELD: &str = "slug";

/// Lookup table from entity id to entity, built once per response.
#[derive(Debug, Clone)]
pub struct RelationResolver {
    entities: HashMap<String, Entity>,
    max_depth: usize,
    slug_field: String,
}

impl RelationResolver {
    /// Indexes a batch of entities. A repeated id replaces the earlier entry.
    pub fn new(entities: impl IntoIterator<Item = Entity>) -> Self {
        let mut table = HashMap::new();
        for entity in entities {
            if let Some(previous) = table.insert(entity.id.clone(), entity) {
                warn!(id = %previous.id, "Duplicate relation id, keeping the last entry");
            }
        }

        Self {
            entities: table,
            max_depth: DEFAULT_MAX_DEPTH,
            slug_field: DEFAULT_SLUG_FIELD.to_string(),
        }
    }

    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    #[must_use]
    pub fn with_slug_field(mut self, slug_field: impl Into<String>) -> Self {
        self.slug_field = slug_field.into();
        self
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn slug_field(&self) -> &str {
        &self.slug_field
    }

    pub fn entity(&self, id: &str) -> Option<&Entity> {
        self.entities.get(id)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Returns a copy of `value` with every known identifier expanded.
    #[must_use]
    pub fn resolve(&self, value: &DynamicValue) -> DynamicValue {
        self.resolve_in(value, &mut Vec::new())
    }

    /// Resolves every field of a content map.
    #[must_use]
    pub fn resolve_content(&self, content: &ContentMap) -> ContentMap {
        ContentMap::new(self.resolve_fields(&content.fields, &mut Vec::new()))
    }

    /// `chain` holds the ids currently being expanded, outermost first.
    fn resolve_in<'a>(&'a self, value: &DynamicValue, chain: &mut Vec<&'a str>) -> DynamicValue {
        match value {
            DynamicValue::String(id) => match self.entities.get_key_value(id) {
                Some((key, _)) if chain.contains(&key.as_str()) => {
                    debug!(id = %id, depth = chain.len(), "Relation cycle, leaving identifier");
                    value.clone()
                }
                Some(_) if chain.len() >= self.max_depth => {
                    debug!(
                        id = %id,
                        depth = chain.len(),
                        "Relation depth bound reached, leaving identifier"
                    );
                    value.clone()
                }
                Some((key, entity)) => {
                    chain.push(key.as_str());
                    let expanded = self.expand(entity, chain);
                    chain.pop();
                    expanded
                }
                None => value.clone(),
            },
            DynamicValue::Array(items) => {
                DynamicValue::Array(items.iter().map(|item| self.resolve_in(item, chain)).collect())
            }
            DynamicValue::Object(fields) => {
                DynamicValue::Object(self.resolve_fields(fields, chain))
            }
            DynamicValue::Number(_) | DynamicValue::Bool(_) | DynamicValue::Null => value.clone(),
        }
    }

    fn resolve_fields<'a>(
        &'a self,
        fields: &BTreeMap<String, DynamicValue>,
        chain: &mut Vec<&'a str>,
    ) -> BTreeMap<String, DynamicValue> {
        fields
            .iter()
            .map(|(key, value)| (key.clone(), self.resolve_in(value, chain)))
            .collect()
    }

    fn expand<'a>(&'a self, entity: &Entity, chain: &mut Vec<&'a str>) -> DynamicValue {
        let mut fields = entity.content.fields.clone();
        fields.insert(
            self.slug_field.clone(),
            DynamicValue::String(entity.path.clone()),
        );
        DynamicValue::Object(self.resolve_fields(&fields, chain))
    }
}

impl Default for RelationResolver {
    fn default() -> Self {
        Self::new(std::iter::empty())
    }
}
