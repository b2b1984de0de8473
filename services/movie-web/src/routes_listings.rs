use axum::extract::State;
use serde_json::json;

use moviedata::{blank_metascore, filter_by_attribute, rated, with_metascore};

use crate::pages::PageResult;
use crate::state::SharedState;

const PG13: &str = "PG-13";

pub async fn all_data(State(state): State<SharedState>) -> PageResult {
    let ds = state.dataset.dataset().map_err(|e| state.query_failure(e))?;
    state.page("allData", "All Movie Data", json!({ "movies": ds.movies() }))
}

/// Only movies that carry a metascore.
pub async fn filtered_data(State(state): State<SharedState>) -> PageResult {
    let ds = state.dataset.dataset().map_err(|e| state.query_failure(e))?;
    let movies = filter_by_attribute(ds, with_metascore);
    state.page(
        "filteredData",
        "Filtered Movie Data",
        json!({ "movies": movies, "count": movies.len() }),
    )
}

/// Every movie; the view marks the ones with a blank metascore.
pub async fn highlighted_data(State(state): State<SharedState>) -> PageResult {
    let ds = state.dataset.dataset().map_err(|e| state.query_failure(e))?;
    let blank = filter_by_attribute(ds, blank_metascore).len();
    state.page(
        "highlightedData",
        "Highlighted Movie Data",
        json!({ "movies": ds.movies(), "blankCount": blank }),
    )
}

pub async fn pg13(State(state): State<SharedState>) -> PageResult {
    let ds = state.dataset.dataset().map_err(|e| state.query_failure(e))?;
    let movies = filter_by_attribute(ds, rated(PG13));
    state.page(
        "pg13",
        "PG-13 Movies",
        json!({ "movies": movies, "count": movies.len() }),
    )
}
