//! HTTP request handlers

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use crate::error::{QueryError, ServerError};
use crate::index::VideoRecord;
use crate::state::AppState;

/// HTTP error type
#[derive(Debug)]
pub enum HttpError {
    InternalError(String),
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            HttpError::InternalError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        (status, body).into_response()
    }
}

impl From<ServerError> for HttpError {
    fn from(err: ServerError) -> Self {
        HttpError::InternalError(err.to_string())
    }
}

/// Health check endpoint
/// GET /api/health
pub async fn health_check() -> &'static str {
    "OK"
}

/// Version endpoint
pub async fn version_check() -> &'static str {
    concat!("video-catalog v", env!("CARGO_PKG_VERSION"))
}

/// Video listing endpoint
/// GET /api/videos
///
/// 200 with the records, or 400 with `[]` when the store directory is
/// unset, missing, not a directory, or unreadable.
pub async fn list_videos(State(state): State<Arc<AppState>>) -> Result<Response, HttpError> {
    // Directory listing is blocking IO — run on blocking thread pool
    let result = tokio::task::spawn_blocking(move || state.catalog.get_videos())
        .await
        .map_err(|e| ServerError::Internal(e.to_string()))?;

    match result {
        Ok(videos) => Ok((StatusCode::OK, Json(videos)).into_response()),
        Err(QueryError::BadRequest(err)) => {
            tracing::warn!("Rejecting video listing: {}", err);
            Ok((StatusCode::BAD_REQUEST, Json(Vec::<VideoRecord>::new())).into_response())
        }
    }
}
