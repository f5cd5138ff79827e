//! Test fixtures for integration tests
//!
//! Builds throwaway media stores on disk and app state pointing at them.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use tempfile::TempDir;
use tower::util::ServiceExt;

use crate::config::ServerConfig;
use crate::http::create_router;
use crate::index::VideoRecord;
use crate::state::AppState;

/// A temporary media store directory
pub struct TestStore {
    dir: TempDir,
}

impl TestStore {
    /// Empty store
    pub fn empty() -> Self {
        Self {
            dir: TempDir::new().expect("create temp store"),
        }
    }

    /// Store holding empty files with the given names
    pub fn with_files(names: &[&str]) -> Self {
        let store = Self::empty();
        for name in names {
            store.add_file(name, b"");
        }
        store
    }

    pub fn add_file(&self, name: &str, contents: &[u8]) {
        std::fs::write(self.dir.path().join(name), contents).expect("write fixture file");
    }

    pub fn add_dir(&self, name: &str) {
        std::fs::create_dir(self.dir.path().join(name)).expect("create fixture dir");
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn path_buf(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }
}

/// Router over a store directory (or none)
pub fn router_for(store_dir: Option<PathBuf>) -> Router {
    let config = ServerConfig {
        store_dir,
        ..Default::default()
    };
    create_router(Arc::new(AppState::new(config)))
}

/// Issue a GET and return the status and raw body
pub async fn get(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("build request");

    let response = app.oneshot(request).await.expect("router is infallible");
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    (status, body.to_vec())
}

/// GET `/api/videos` and decode the JSON body
pub async fn get_videos(app: Router) -> (StatusCode, Vec<VideoRecord>) {
    let (status, body) = get(app, "/api/videos").await;
    let videos = serde_json::from_slice(&body).expect("body is a JSON array of records");
    (status, videos)
}

pub fn record(id: &str, video: &str, thumbnail: &str, metadata: &str) -> VideoRecord {
    VideoRecord {
        id: id.into(),
        video: video.into(),
        thumbnail: thumbnail.into(),
        metadata: metadata.into(),
    }
}
