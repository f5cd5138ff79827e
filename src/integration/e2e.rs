//! End-to-end tests through the HTTP router

use std::collections::HashSet;

use axum::http::StatusCode;

use super::fixtures::{get, get_videos, record, router_for, TestStore};

#[tokio::test]
async fn test_groups_store_into_records() {
    let store = TestStore::with_files(&["a.mp4", "a.webp", "a.json", "b.mp4"]);

    let (status, videos) = get_videos(router_for(Some(store.path_buf()))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        videos,
        vec![
            record("a", "a.mp4", "a.webp", "a.json"),
            record("b", "b.mp4", "", ""),
        ]
    );
}

#[tokio::test]
async fn test_empty_store_is_ok() {
    let store = TestStore::empty();

    let (status, videos) = get_videos(router_for(Some(store.path_buf()))).await;

    assert_eq!(status, StatusCode::OK);
    assert!(videos.is_empty());
}

#[tokio::test]
async fn test_store_pointing_at_file_is_bad_request() {
    let store = TestStore::with_files(&["a.mp4"]);

    let (status, body) = get(router_for(Some(store.path().join("a.mp4"))), "/api/videos").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, b"[]");
}

#[tokio::test]
async fn test_missing_store_is_bad_request() {
    let store = TestStore::empty();

    let (status, videos) = get_videos(router_for(Some(store.path().join("gone")))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(videos.is_empty());
}

#[tokio::test]
async fn test_unset_store_is_bad_request() {
    let (status, body) = get(router_for(None), "/api/videos").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, b"[]");
}

#[tokio::test]
async fn test_records_have_string_fields() {
    let store = TestStore::with_files(&["video1.mp4", "video1.webp", "video1.json", "video2.mp4"]);

    let (_, body) = get(router_for(Some(store.path_buf())), "/api/videos").await;
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 2);
    for item in items {
        for key in ["id", "video", "thumbnail", "metadata"] {
            assert!(item[key].is_string(), "{key} should be a string in {item}");
        }
    }
    assert_eq!(items[1]["metadata"], "");
}

#[tokio::test]
async fn test_repeated_queries_agree() {
    let store = TestStore::with_files(&["x.mp4", "x.json", "y.webp", "z.txt"]);
    let app = router_for(Some(store.path_buf()));

    let (_, first) = get_videos(app.clone()).await;
    let (_, second) = get_videos(app).await;

    let first: HashSet<_> = first.into_iter().map(|r| format!("{r:?}")).collect();
    let second: HashSet<_> = second.into_iter().map(|r| format!("{r:?}")).collect();
    assert_eq!(first, second);
    assert_eq!(first.len(), 3);
}

#[tokio::test]
async fn test_nested_directories_are_ignored() {
    let store = TestStore::with_files(&["a.mp4"]);
    store.add_dir("season1");
    store.add_dir("a.webp");

    let (status, videos) = get_videos(router_for(Some(store.path_buf()))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(videos, vec![record("a", "a.mp4", "", "")]);
}

#[tokio::test]
async fn test_media_files_are_served() {
    let store = TestStore::empty();
    store.add_file("a.json", br#"{"title":"A"}"#);

    let (status, body) = get(router_for(Some(store.path_buf())), "/media/a.json").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, br#"{"title":"A"}"#);
}

#[tokio::test]
async fn test_missing_media_file_is_not_found() {
    let store = TestStore::empty();

    let (status, _) = get(router_for(Some(store.path_buf())), "/media/nope.mp4").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_health() {
    let (status, body) = get(router_for(None), "/api/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"OK");
}
