use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde_json::{json, Value};
use tracing::{debug, error, warn};

use moviedata::QueryError;

use crate::state::AppState;

pub type PageResult = Result<Html<String>, PageError>;

#[derive(Debug)]
pub enum PageError {
    /// The error view rendered fine; send it with `status`.
    Rendered { status: StatusCode, html: String },
    /// Rendering itself failed.
    Internal(String),
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        match self {
            Self::Rendered { status, html } => (status, Html(html)).into_response(),
            Self::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg).into_response(),
        }
    }
}

impl AppState {
    pub fn page(&self, view: &str, title: &str, context: Value) -> PageResult {
        self.renderer
            .render_page(view, title, context)
            .map(Html)
            .map_err(|e| {
                error!(view, error = %e, "failed to render page");
                PageError::Internal("Internal Server Error".to_string())
            })
    }

    pub fn error_page(&self, status: StatusCode, message: &str) -> PageError {
        let title = match status.canonical_reason() {
            Some(reason) => format!("{} {}", status.as_u16(), reason),
            None => status.as_u16().to_string(),
        };
        match self.page("error", &title, json!({ "message": message })) {
            Ok(Html(html)) => PageError::Rendered { status, html },
            Err(e) => e,
        }
    }

    /// Lookup failures are 404s with a message naming what was wrong; a
    /// missing dataset is a 503.
    pub fn query_failure(&self, err: QueryError) -> PageError {
        let (status, message) = match &err {
            QueryError::InvalidInput(_) => (StatusCode::NOT_FOUND, "Invalid movie ID."),
            QueryError::OutOfRange { .. } => (StatusCode::NOT_FOUND, "Invalid movie index."),
            QueryError::NotFound(_) => {
                (StatusCode::NOT_FOUND, "The movie ID you entered does not exist.")
            }
            QueryError::DatasetUnavailable(_) => (
                StatusCode::SERVICE_UNAVAILABLE,
                "Movie data is not available right now.",
            ),
        };
        if status == StatusCode::SERVICE_UNAVAILABLE {
            warn!(error = %err, "query against unavailable dataset");
        } else {
            debug!(error = %err, "lookup failed");
        }
        self.error_page(status, message)
    }
}
