use axum::{handler::Handler, routing::get, Router};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::state::SharedState;
use crate::{routes_listings, routes_movies, routes_pages};

/// Pages first, then static assets from the public directory, then the
/// 404 view.
pub fn build_router(state: SharedState) -> Router {
    let not_found = routes_pages::not_found.with_state(state.clone());
    let assets = ServeDir::new(&state.config.public_dir).not_found_service(not_found);

    Router::new()
        .route("/", get(routes_pages::home))
        .route("/data", get(routes_pages::data_status))
        .route("/data/movie/:index", get(routes_movies::movie_by_index))
        .route("/data/search/id", get(routes_pages::search_id_form))
        .route("/data/search/id/", get(routes_pages::search_id_form))
        .route("/data/search/id/result", get(routes_movies::search_id_result))
        .route("/data/search/title", get(routes_pages::search_title_form))
        .route("/data/search/title/", get(routes_pages::search_title_form))
        .route("/data/search/title/result", get(routes_movies::search_title_result))
        .route("/allData", get(routes_listings::all_data))
        .route("/filteredData", get(routes_listings::filtered_data))
        .route("/highlightedData", get(routes_listings::highlighted_data))
        .route("/pg13", get(routes_listings::pg13))
        .fallback_service(assets)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
