//! Axum router configuration

use axum::{
    http::{header, HeaderValue, Method},
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::state::AppState;

use super::handlers::{health_check, list_videos, version_check};

/// Build the CORS layer from configuration.
///
/// A `*` entry allows any origin without credentials; otherwise only the
/// listed origins are allowed and credentials are permitted.
pub fn cors_layer(config: &ServerConfig) -> CorsLayer {
    let methods = [
        Method::GET,
        Method::POST,
        Method::PUT,
        Method::DELETE,
        Method::PATCH,
        Method::OPTIONS,
    ];
    let exposed = [header::LOCATION, header::AUTHORIZATION];

    if config.cors_allowed_origins.iter().any(|o| o == "*") {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(methods)
            .allow_headers(Any)
            .expose_headers(exposed);
    }

    let origins: Vec<HeaderValue> = config
        .cors_allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("Ignoring invalid CORS origin {:?}: {}", origin, e);
                None
            }
        })
        .collect();

    // Credentials forbid wildcard headers, so mirror the request instead.
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(methods)
        .allow_headers(tower_http::cors::AllowHeaders::mirror_request())
        .expose_headers(exposed)
        .allow_credentials(true)
}

/// Create the Axum router with all routes
pub fn create_router(state: Arc<AppState>) -> Router {
    let mut router = Router::new()
        .route("/api/health", get(health_check))
        .route("/api/videos", get(list_videos))
        .route("/version", get(version_check));

    // Raw assets, addressed by the names in the video records
    if let Some(dir) = state.store_dir() {
        router = router.nest_service("/media", ServeDir::new(dir));
    }

    let router = router.layer(TraceLayer::new_for_http());

    let router = if state.config.cors_enabled {
        router.layer(cors_layer(&state.config))
    } else {
        router
    };

    router.with_state(state)
}
