//! Content sources.
//!
//! A [`ContentSource`] hands back raw response bytes; decoding happens in
//! the pipeline. [`FileSource`] serves a directory of recorded responses.

use std::path::{Component, Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("content not found: {0}")]
    NotFound(String),

    #[error("invalid content path: {0:?}")]
    InvalidPath(String),

    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Parameters for a story listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoryQuery {
    /// Only stories whose `full_slug` starts with this prefix.
    pub starts_with: Option<String>,
    pub exclude_startpages: bool,
    pub resolve_relations: Vec<String>,
}

impl StoryQuery {
    pub fn starting_with(prefix: impl Into<String>) -> Self {
        Self {
            starts_with: Some(prefix.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn exclude_startpages(mut self) -> Self {
        self.exclude_startpages = true;
        self
    }

    /// Query-string parameters for a content delivery request.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("version", "published".to_string())];
        if let Some(prefix) = &self.starts_with {
            params.push(("starts_with", prefix.clone()));
        }
        if self.exclude_startpages {
            params.push(("is_startpage", "false".to_string()));
        }
        if !self.resolve_relations.is_empty() {
            params.push(("resolve_relations", self.resolve_relations.join(",")));
        }
        params
    }
}

/// Where story, story-list and link payloads come from.
pub trait ContentSource {
    /// Raw single-story response for `path` (e.g. `home`, `blogs/first`).
    fn get_story(&self, path: &str, resolve_relations: &[String]) -> Result<Vec<u8>, SourceError>;

    /// Raw story-list response.
    fn get_stories(&self, query: &StoryQuery) -> Result<Vec<u8>, SourceError>;

    /// Raw links response.
    fn get_links(&self) -> Result<Vec<u8>, SourceError>;
}

/// Reads responses from a directory:
/// `<root>/<path>.json`, `<root>/stories.json` and `<root>/links.json`.
///
/// Responses are served as recorded. Listing filters are applied by the
/// pipeline, not here.
#[derive(Debug, Clone)]
pub struct FileSource {
    root: PathBuf,
}

impl FileSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn story_file(&self, path: &str) -> Result<PathBuf, SourceError> {
        let trimmed = path.trim_matches('/');
        let relative = Path::new(trimmed);
        let safe = !trimmed.is_empty()
            && relative
                .components()
                .all(|c| matches!(c, Component::Normal(_)));
        if !safe {
            return Err(SourceError::InvalidPath(path.to_string()));
        }
        Ok(self.root.join(format!("{trimmed}.json")))
    }

    fn read(&self, file: PathBuf, name: &str) -> Result<Vec<u8>, SourceError> {
        match std::fs::read(&file) {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(SourceError::NotFound(name.to_string()))
            }
            Err(source) => Err(SourceError::Io { path: file, source }),
        }
    }
}

impl ContentSource for FileSource {
    fn get_story(&self, path: &str, resolve_relations: &[String]) -> Result<Vec<u8>, SourceError> {
        let file = self.story_file(path)?;
        debug!(path, relations = ?resolve_relations, "Reading story");
        self.read(file, path)
    }

    fn get_stories(&self, query: &StoryQuery) -> Result<Vec<u8>, SourceError> {
        debug!(params = ?query.to_params(), "Reading story list");
        self.read(self.root.join("stories.json"), "stories")
    }

    fn get_links(&self) -> Result<Vec<u8>, SourceError> {
        self.read(self.root.join("links.json"), "links")
    }
}
