//! Integration tests for the Axum web front-end.
//!
//! Handlers are exercised through the real router with the port traits
//! mocked out; no database or downloader binary is touched.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use bchelper_axum::bootstrap::{AxumContext, CorsConfig};
use bchelper_axum::routes::create_router;
use bchelper_core::{
    FetchError, MockMediaFetcher, MockPlaylistStore, RebuildSummary, SHUFFLE_PLAYLIST_ID,
    StoreError,
};

fn app_with(fetcher: MockMediaFetcher, playlists: MockPlaylistStore) -> Router {
    let ctx = AxumContext {
        fetcher: Arc::new(fetcher),
        playlists: Arc::new(playlists),
    };
    create_router(ctx, &CorsConfig::AllowAll)
}

/// Router with mocks that panic on any port call.
fn idle_app() -> Router {
    app_with(MockMediaFetcher::new(), MockPlaylistStore::new())
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_endpoint_returns_ok_json() {
    let response = idle_app()
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn index_serves_the_embedded_page() {
    let response = idle_app()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("text/html"), "{content_type}");

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let html = std::str::from_utf8(&bytes).unwrap();
    assert!(html.contains("BlackCandy Helper"));
}

#[tokio::test]
async fn download_with_missing_url_is_rejected_before_invocation() {
    let mut fetcher = MockMediaFetcher::new();
    fetcher.expect_fetch().times(0);

    let response = app_with(fetcher, MockPlaylistStore::new())
        .oneshot(post_json("/api/download", "{}"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["error"], "URL is required");
}

#[tokio::test]
async fn download_with_empty_url_is_rejected_before_invocation() {
    let mut fetcher = MockMediaFetcher::new();
    fetcher.expect_fetch().times(0);

    let response = app_with(fetcher, MockPlaylistStore::new())
        .oneshot(post_json("/api/download", r#"{"url": ""}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["error"], "URL is required");
}

#[tokio::test]
async fn successful_download_acknowledges() {
    let mut fetcher = MockMediaFetcher::new();
    fetcher
        .expect_fetch()
        .withf(|url| url == "https://example.com/watch?v=abc")
        .times(1)
        .returning(|_| Ok(()));

    let response = app_with(fetcher, MockPlaylistStore::new())
        .oneshot(post_json(
            "/api/download",
            r#"{"url": "https://example.com/watch?v=abc"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(
        body["message"],
        "Download completed and songs added to Shuffle playlist"
    );
}

#[tokio::test]
async fn download_timeout_maps_to_500_with_fixed_message() {
    let mut fetcher = MockMediaFetcher::new();
    fetcher
        .expect_fetch()
        .returning(|_| Err(FetchError::TimedOut(300)));

    let response = app_with(fetcher, MockPlaylistStore::new())
        .oneshot(post_json(
            "/api/download",
            r#"{"url": "https://example.com/slow"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = json_body(response).await;
    assert_eq!(body["error"], "Download timed out");
}

#[tokio::test]
async fn download_failure_carries_captured_stderr() {
    let mut fetcher = MockMediaFetcher::new();
    fetcher.expect_fetch().returning(|_| {
        Err(FetchError::Failed {
            stderr: "ERROR: Unsupported URL: https://example.com/nope".to_string(),
        })
    });

    let response = app_with(fetcher, MockPlaylistStore::new())
        .oneshot(post_json(
            "/api/download",
            r#"{"url": "https://example.com/nope"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = json_body(response).await;
    assert_eq!(body["error"], "Download failed");
    assert!(
        body["details"]
            .as_str()
            .unwrap()
            .contains("Unsupported URL"),
        "details: {body}"
    );
}

#[tokio::test]
async fn shuffle_reports_the_reinserted_count() {
    let mut playlists = MockPlaylistStore::new();
    playlists.expect_rebuild_shuffle().times(1).returning(|| {
        Ok(RebuildSummary {
            playlist_id: SHUFFLE_PLAYLIST_ID,
            song_count: 12,
        })
    });

    let response = app_with(MockMediaFetcher::new(), playlists)
        .oneshot(post_json("/api/shuffle_all", ""))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["count"], 12);
    assert_eq!(body["message"], "Playlist 3 reset and shuffled with 12 songs.");
}

#[tokio::test]
async fn shuffle_surfaces_the_raw_database_error() {
    let mut playlists = MockPlaylistStore::new();
    playlists
        .expect_rebuild_shuffle()
        .returning(|| Err(StoreError::Storage("deadlock detected".to_string())));

    let response = app_with(MockMediaFetcher::new(), playlists)
        .oneshot(post_json("/api/shuffle_all", ""))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = json_body(response).await;
    assert_eq!(body["error"], "deadlock detected");
}
