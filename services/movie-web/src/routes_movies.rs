use axum::extract::{
    rejection::{PathRejection, QueryRejection},
    Path, Query, State,
};
use axum::http::StatusCode;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use moviedata::{by_id_str, by_index_str, search_by_title, QueryError};

use crate::pages::PageResult;
use crate::state::SharedState;

#[derive(Deserialize)]
pub struct IdSearch {
    pub movie_id: Option<String>,
}

#[derive(Deserialize)]
pub struct TitleSearch {
    pub movie_title: Option<String>,
}

pub async fn movie_by_index(
    State(state): State<SharedState>,
    index: Result<Path<String>, PathRejection>,
) -> PageResult {
    let ds = state.dataset.dataset().map_err(|e| state.query_failure(e))?;
    // An index that cannot even be decoded is just another bad index.
    let Path(index) = index.map_err(|rejection| {
        state.query_failure(QueryError::OutOfRange { index: rejection.body_text(), len: ds.len() })
    })?;
    let movie = by_index_str(ds, &index).map_err(|e| state.query_failure(e))?;

    state.page(
        "movie",
        "Movie Details",
        json!({
            "index": index.trim(),
            "movieId": movie.movie_id,
            "movieTitle": movie.title,
            "movie": movie,
        }),
    )
}

pub async fn search_id_result(
    State(state): State<SharedState>,
    q: Result<Query<IdSearch>, QueryRejection>,
) -> PageResult {
    let ds = state.dataset.dataset().map_err(|e| state.query_failure(e))?;
    let Query(q) = q.map_err(|rejection| {
        state.query_failure(QueryError::InvalidInput(rejection.body_text()))
    })?;
    let raw = q.movie_id.unwrap_or_default();
    let movie = by_id_str(ds, &raw).map_err(|e| state.query_failure(e))?;

    state.page("searchResults", "Movie Found", json!({ "movie": movie }))
}

/// A missing `movie_title` searches for the empty term.
pub async fn search_title_result(
    State(state): State<SharedState>,
    q: Result<Query<TitleSearch>, QueryRejection>,
) -> PageResult {
    let ds = state.dataset.dataset().map_err(|e| state.query_failure(e))?;
    let Query(q) = q.map_err(|rejection| {
        debug!(error = %rejection.body_text(), "bad title search");
        state.error_page(StatusCode::NOT_FOUND, "Invalid movie title.")
    })?;
    let term = q.movie_title.unwrap_or_default();
    let movies = search_by_title(ds, &term);

    state.page(
        "searchResults",
        "Search Results",
        json!({
            "movies": movies,
            "count": movies.len(),
            "searchTerm": term,
        }),
    )
}
