//! Fallback for paths no route matches.

use axum::{
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use tracing::debug;

/// Answer unknown paths with a JSON 404
pub async fn not_found_handler(uri: Uri) -> Response {
    debug!(path = %uri.path(), "No route matched");

    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({
            "error": format!("No route for {}", uri.path())
        })),
    )
        .into_response()
}
