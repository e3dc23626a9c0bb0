//! Error types for block decoding.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, BlockError>;

#[derive(Debug, Error)]
pub enum BlockError {
    #[error("block is not an object (found {found})")]
    NotAnObject { found: &'static str },

    #[error("block has no \"component\" field")]
    MissingDiscriminator,

    #[error("unknown block type: {0}")]
    UnknownDiscriminator(String),

    #[error("invalid '{component}' block: {source}")]
    Decode {
        component: String,
        #[source]
        source: storyline_types::Error,
    },
}
