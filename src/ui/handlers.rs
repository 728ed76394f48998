//! Web UI handlers

use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    response::{Html, IntoResponse, Response},
};

use crate::api::server::SharedState;
use crate::error::Result;

use super::assets::{content_type, Assets};

/// Landing page
pub async fn home(State(state): State<SharedState>, headers: HeaderMap) -> Result<Html<String>> {
    let html = state.site.home(&headers)?;
    Ok(Html(html))
}

/// Embedded static files under /static
pub async fn static_asset(Path(path): Path<String>) -> Response {
    match Assets::get(&path) {
        Some(file) => (
            [
                (header::CONTENT_TYPE, content_type(&path)),
                (header::CACHE_CONTROL, "public, max-age=86400"),
            ],
            file.data.into_owned(),
        )
            .into_response(),
        None => {
            tracing::debug!("Static asset not found: {}", path);
            (StatusCode::NOT_FOUND, "Not found").into_response()
        }
    }
}
