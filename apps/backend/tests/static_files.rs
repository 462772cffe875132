//! Static data/image serving and the HTTP card source.

mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use pretty_assertions::assert_eq;

use common::{fixtures, TestContext, PLACEHOLDER_BYTES};
use daily_trivia_backend::services::source::{FsCardSource, HttpCardSource};
use trivia_core::{CardSource, DateKey, FetchError, Viewer};

const DATE: &str = "2025-04-24";

/// Serve the context's router on an ephemeral port and return its base URL.
async fn spawn_server(ctx: &TestContext) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = ctx.router();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

/// Test raw day files are served under /data.
#[tokio::test]
async fn test_serves_day_file() {
    let ctx = TestContext::new();
    let content = fixtures::day_content(DATE);
    ctx.write_day(DATE, &content);
    let server = TestServer::new(ctx.router()).unwrap();

    let response = server.get("/data/202504/20250424.txt").await;

    response.assert_status_ok();
    assert_eq!(response.text(), content);
}

/// Test existing images are served as-is.
#[tokio::test]
async fn test_serves_image() {
    let ctx = TestContext::new();
    ctx.write_image(DATE, "card0.png", b"card zero");
    let server = TestServer::new(ctx.router()).unwrap();

    let response = server.get("/images/202504/card0.png").await;

    response.assert_status_ok();
    assert_eq!(response.as_bytes().as_ref(), b"card zero");
}

/// Test missing images fall back to the placeholder.
#[tokio::test]
async fn test_missing_image_uses_placeholder() {
    let ctx = TestContext::new();
    let server = TestServer::new(ctx.router()).unwrap();

    let response = server.get("/images/202504/missing.png").await;

    response.assert_status_ok();
    assert_eq!(response.as_bytes().as_ref(), PLACEHOLDER_BYTES);
}

/// Test the HTTP source fetches a day from a static host.
#[tokio::test]
async fn test_http_source_fetches_day() {
    let ctx = TestContext::new();
    let content = fixtures::day_content(DATE);
    ctx.write_day(DATE, &content);
    let base_url = spawn_server(&ctx).await;

    let source = HttpCardSource::new(base_url);
    let body = source.fetch(&DateKey::parse(DATE)).await.unwrap();
    assert_eq!(body, content);

    let mut viewer = Viewer::default();
    let session = viewer.load_date(&source, DATE).await.unwrap();
    assert_eq!(session.card_count(), 4);
}

/// Test a non-2xx response is a status error.
#[tokio::test]
async fn test_http_source_reports_status() {
    let ctx = TestContext::new();
    let base_url = spawn_server(&ctx).await;

    let source = HttpCardSource::new(base_url);
    let result = source.fetch(&DateKey::parse("2025-04-25")).await;

    match result {
        Err(FetchError::Status { status, url }) => {
            assert_eq!(status, StatusCode::NOT_FOUND.as_u16());
            assert!(url.ends_with("/data/202504/20250425.txt"));
        }
        other => panic!("expected status error, got {:?}", other),
    }
}

/// Test invalid UTF-8 decodes the same way from disk and over HTTP.
#[tokio::test]
async fn test_invalid_utf8_matches_across_sources() {
    let ctx = TestContext::new();
    let mut bytes = fixtures::day_content(DATE).into_bytes();
    bytes[15] = 0xFF;
    ctx.write_day_bytes(DATE, &bytes);
    let base_url = spawn_server(&ctx).await;

    let key = DateKey::parse(DATE);
    let from_disk = FsCardSource::new(ctx.config.data_dir.clone())
        .fetch(&key)
        .await
        .unwrap();
    let from_http = HttpCardSource::new(base_url).fetch(&key).await.unwrap();

    assert_eq!(from_disk, from_http);
    assert!(from_disk.contains('\u{FFFD}'));

    let server = TestServer::new(ctx.router()).unwrap();
    server
        .post("/api/session/load")
        .json(&fixtures::load_request(DATE))
        .await
        .assert_status_ok();
}
