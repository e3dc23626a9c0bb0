//! Pipeline configuration.
//!
//! Read from `~/.storyline/pipeline.toml`:
//!
//! ```toml
//! [pipeline]
//! max_resolution_depth = 4
//! slug_field = "slug"
//! body_field = "body"
//! resolve_relations = ["popular-articles.articles"]
//! article_prefix = "blogs/"
//! ```
//!
//! Every key is optional. A missing or unreadable file leaves the defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use storyline_model::Entity;
use storyline_resolve::{DEFAULT_MAX_DEPTH, DEFAULT_SLUG_FIELD, RelationResolver};
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Bound on nested relation expansions.
    #[serde(default = "default_max_resolution_depth")]
    pub max_resolution_depth: usize,
    /// Key an expanded relation's path is written to.
    #[serde(default = "default_slug_field")]
    pub slug_field: String,
    /// Story content field holding the block array.
    #[serde(default = "default_body_field")]
    pub body_field: String,
    /// Relation paths asked of the content source (`<component>.<field>`).
    #[serde(default = "default_resolve_relations")]
    pub resolve_relations: Vec<String>,
    /// Folder articles live under.
    #[serde(default = "default_article_prefix")]
    pub article_prefix: String,
}

fn default_max_resolution_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

fn default_slug_field() -> String {
    DEFAULT_SLUG_FIELD.to_string()
}

fn default_body_field() -> String {
    "body".to_string()
}

fn default_resolve_relations() -> Vec<String> {
    vec!["popular-articles.articles".to_string()]
}

fn default_article_prefix() -> String {
    "blogs/".to_string()
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            max_resolution_depth: default_max_resolution_depth(),
            slug_field: default_slug_field(),
            body_field: default_body_field(),
            resolve_relations: default_resolve_relations(),
            article_prefix: default_article_prefix(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    pipeline: PipelineConfig,
}

impl PipelineConfig {
    /// Loads `~/.storyline/pipeline.toml` if it exists.
    pub fn load() -> Self {
        Self::load_from(config_dir().join("pipeline.toml"))
    }

    /// Loads from an explicit path, falling back to defaults.
    pub fn load_from(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            info!("No pipeline config at {:?}, using defaults", path);
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(contents) => match toml::from_str::<ConfigFile>(&contents) {
                Ok(file) => {
                    info!("Loaded pipeline config from {:?}", path);
                    file.pipeline
                }
                Err(e) => {
                    warn!(
                        "Failed to parse pipeline config {:?}: {}. Falling back to defaults.",
                        path, e
                    );
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Failed to read pipeline config {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    /// Builds a resolver over `rels` with this configuration's bounds.
    pub fn resolver(&self, rels: impl IntoIterator<Item = Entity>) -> RelationResolver {
        RelationResolver::new(rels)
            .with_max_depth(self.max_resolution_depth)
            .with_slug_field(self.slug_field.as_str())
    }

    /// Full story path for an article slug.
    pub fn article_path(&self, slug: &str) -> String {
        let slug = slug.trim_start_matches('/');
        if slug.starts_with(&self.article_prefix) {
            slug.to_string()
        } else {
            format!("{}{}", self.article_prefix, slug)
        }
    }
}

/// Resolve the Storyline config directory.
fn config_dir() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        Path::new(&home).join(".storyline")
    } else if let Ok(home) = std::env::var("USERPROFILE") {
        Path::new(&home).join(".storyline")
    } else {
        PathBuf::from(".storyline")
    }
}
