use thiserror::Error;

use crate::record::PlayerId;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("feature vector does not match the schema: expected {expected} dimensions, got {actual}")]
    SchemaMismatch { expected: usize, actual: usize },

    #[error("normalization input has wrong shape: expected {expected} dimensions, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("player not found in corpus: {0}")]
    NotFound(PlayerId),

    #[error("corpus data unavailable: {0}")]
    DataUnavailable(String),

    #[error("trained model unavailable: {0}")]
    ModelUnavailable(String),

    #[error("invalid model artifact: {0}")]
    InvalidArtifact(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
