//! Core value types for Storyline.
//!
//! This crate defines the schema-less building blocks that every stage of the
//! content pipeline consumes:
//! - [`DynamicValue`]: any JSON value, decoded in a fixed probe order
//! - [`ContentMap`]: the open-world field map of one story or block
//!
//! Typed shapes (rich text, stories, blocks) belong in the crates layered on
//! top of this one, not here.

mod content;
mod value;

pub use content::ContentMap;
pub use value::{DynamicValue, Number};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while decoding or reading dynamic content.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("type mismatch: expected {expected}, found {found}")]
    DecodeTypeMismatch {
        expected: &'static str,
        found: String,
    },

    #[error("missing required field: {field}")]
    MissingRequiredField { field: String },

    #[error("invalid field '{field}': expected {expected}")]
    InvalidField {
        field: String,
        expected: &'static str,
    },
}

impl Error {
    /// Returns true if this error reports an absent required field.
    #[must_use]
    pub fn is_missing_field(&self) -> bool {
        matches!(self, Self::MissingRequiredField { .. })
    }
}
