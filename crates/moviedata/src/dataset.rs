//! The loaded movie collection and the slot the service holds it in.

use std::path::Path;
use std::sync::Arc;

use tracing::{error, info};

use crate::{IdIndex, LoadError, MovieId, MovieRecord, QueryError, QueryResult};

pub type Hash32 = [u8; 32];

/// Immutable, ordered snapshot of the movie dataset.
#[derive(Debug, Clone)]
pub struct Dataset {
    movies: Vec<MovieRecord>,
    by_id: IdIndex,
    fingerprint: Option<Hash32>,
}

impl Dataset {
    pub fn new(movies: Vec<MovieRecord>) -> Self {
        let by_id = IdIndex::build(&movies);
        Self { movies, by_id, fingerprint: None }
    }

    /// Parses a JSON array of movie objects. The fingerprint is the
    /// BLAKE3 hash of the exact bytes given.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, LoadError> {
        let movies: Vec<MovieRecord> = serde_json::from_slice(bytes)?;
        let mut ds = Self::new(movies);
        ds.fingerprint = Some(blake3::hash(bytes).into());
        Ok(ds)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| LoadError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_slice(&bytes)
    }

    pub fn movies(&self) -> &[MovieRecord] {
        &self.movies
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    pub fn get(&self, pos: usize) -> Option<&MovieRecord> {
        self.movies.get(pos)
    }

    pub fn position_of(&self, id: MovieId) -> Option<usize> {
        self.by_id.position(id)
    }

    pub fn fingerprint_hex(&self) -> Option<String> {
        self.fingerprint.map(hex::encode)
    }
}

/// Either a loaded dataset or the reason there is none.
#[derive(Debug, Clone)]
pub enum DatasetSlot {
    Ready(Arc<Dataset>),
    Unavailable(String),
}

impl DatasetSlot {
    /// Loads the document at `path`. A failure is logged and yields
    /// `Unavailable`; it never aborts the caller.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Dataset::load(path) {
            Ok(ds) => {
                info!(
                    path = %path.display(),
                    movies = ds.len(),
                    fingerprint = ds.fingerprint_hex().unwrap_or_default(),
                    "movie dataset loaded"
                );
                Self::Ready(Arc::new(ds))
            }
            Err(e) => {
                error!(path = %path.display(), error = %e, "failed to load movie dataset");
                Self::Unavailable(e.to_string())
            }
        }
    }

    pub fn dataset(&self) -> QueryResult<&Dataset> {
        match self {
            Self::Ready(ds) => Ok(ds.as_ref()),
            Self::Unavailable(reason) => Err(QueryError::DatasetUnavailable(reason.clone())),
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }
}

impl From<Dataset> for DatasetSlot {
    fn from(ds: Dataset) -> Self {
        Self::Ready(Arc::new(ds))
    }
}
