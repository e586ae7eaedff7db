//! HTTP handlers for the embedded todos listing page.

use axum::{
    body::Body,
    extract::Path,
    http::{Response, StatusCode, header},
    response::{Html, IntoResponse},
};
use tracing::instrument;

use crate::static_assets::Assets;

/// Serve the todos listing page
#[instrument]
pub async fn todos_page() -> impl IntoResponse {
    match Assets::get("todos.html") {
        Some(index) => Html(String::from_utf8_lossy(&index.data).to_string()).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

/// Serve an embedded static file with its guessed content type
#[instrument]
pub async fn serve_static_file(Path(file): Path<String>) -> impl IntoResponse {
    match Assets::get(&file) {
        Some(content) => {
            let mime = mime_guess::from_path(&file).first_or_octet_stream();

            Response::builder()
                .header(header::CONTENT_TYPE, mime.as_ref())
                .header(header::CACHE_CONTROL, "no-cache")
                .body(Body::from(content.data.into_owned()))
                .unwrap()
        }
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
