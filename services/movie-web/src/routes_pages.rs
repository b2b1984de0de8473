use axum::{extract::State, http::StatusCode, response::IntoResponse};
use serde_json::json;

use crate::pages::PageResult;
use crate::state::SharedState;

pub async fn home(State(state): State<SharedState>) -> PageResult {
    state.page(
        "home",
        "Welcome",
        json!({
            "name": state.config.site_author,
            "studentId": state.config.site_author_id,
        }),
    )
}

pub async fn data_status(State(state): State<SharedState>) -> PageResult {
    let context = match state.dataset.dataset() {
        Ok(ds) => json!({
            "ready": true,
            "message": "JSON data is loaded and ready!",
            "count": ds.len(),
            "empty": ds.is_empty(),
            "fingerprint": ds.fingerprint_hex(),
        }),
        Err(_) => json!({
            "ready": false,
            "message": "Movie data could not be loaded.",
        }),
    };
    state.page("data", "Movie Data", context)
}

pub async fn search_id_form(State(state): State<SharedState>) -> PageResult {
    state.page("searchById", "Search by Movie ID", json!({}))
}

pub async fn search_title_form(State(state): State<SharedState>) -> PageResult {
    state.page("searchByTitle", "Search by Movie Title", json!({}))
}

pub async fn not_found(State(state): State<SharedState>) -> impl IntoResponse {
    state.error_page(StatusCode::NOT_FOUND, "The page you are looking for does not exist.")
}
