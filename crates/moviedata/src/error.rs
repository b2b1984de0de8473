use thiserror::Error;

use crate::MovieId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("invalid input: {0:?} is not an integer")]
    InvalidInput(String),
    #[error("index {index} is out of range for {len} movies")]
    OutOfRange { index: String, len: usize },
    #[error("no movie with id {0}")]
    NotFound(MovieId),
    #[error("movie dataset is unavailable: {0}")]
    DatasetUnavailable(String),
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse movie dataset: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type QueryResult<T> = std::result::Result<T, QueryError>;
