//! Error types for model decoding.

use thiserror::Error;

/// Result type for model operations.
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors that can occur while decoding API payloads into models.
#[derive(Debug, Error)]
pub enum ModelError {
    /// A payload or one of its required fields could not be decoded.
    #[error("invalid {context}: {source}")]
    Decode {
        context: &'static str,
        #[source]
        source: storyline_types::Error,
    },
}

impl ModelError {
    /// Returns a mapper that tags a value error with what was being decoded.
    pub(crate) fn decoding(context: &'static str) -> impl FnOnce(storyline_types::Error) -> Self {
        move |source| Self::Decode { context, source }
    }

    /// Returns true if the failure was an absent required field.
    #[must_use]
    pub fn is_missing_field(&self) -> bool {
        match self {
            Self::Decode { source, .. } => source.is_missing_field(),
        }
    }
}
