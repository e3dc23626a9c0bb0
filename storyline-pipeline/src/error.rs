use crate::source::SourceError;
use storyline_model::ModelError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PipelineError>;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("content source error: {0}")]
    Source(#[from] SourceError),

    #[error("decode error: {0}")]
    Model(#[from] ModelError),
}
