use std::collections::HashMap;

use crate::{MovieId, MovieRecord};

/// Maps a movie id to the position of its first occurrence.
#[derive(Debug, Clone)]
pub struct IdIndex {
    map: HashMap<MovieId, usize>,
}

impl IdIndex {
    pub fn build(movies: &[MovieRecord]) -> Self {
        let mut idx = Self::with_capacity(movies.len());
        for (pos, movie) in movies.iter().enumerate() {
            idx.add(movie.movie_id, pos);
        }
        idx
    }

    fn with_capacity(n: usize) -> Self {
        Self { map: HashMap::with_capacity(n) }
    }

    /// Later duplicates never replace the first position.
    pub fn add(&mut self, id: MovieId, pos: usize) {
        self.map.entry(id).or_insert(pos);
    }

    pub fn position(&self, id: MovieId) -> Option<usize> {
        self.map.get(&id).copied()
    }
}
