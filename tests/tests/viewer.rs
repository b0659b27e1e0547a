//! Tests for the viewer endpoints.
//!
//! The viewer's own requests pass through the recording middleware, so the
//! server observes itself; assertions account for that.

use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum_test::TestServer;
use integration_tests::setup::TestContext;

fn session_header(id: &'static str) -> (HeaderName, HeaderValue) {
    (
        HeaderName::from_static("x-session-id"),
        HeaderValue::from_static(id),
    )
}

#[tokio::test]
async fn test_stats_reflect_recorded_traffic() {
    let ctx = TestContext::new();
    let server = TestServer::new(ctx.router.clone()).expect("Failed to create test server");

    server.get("/health").await.assert_status_ok();

    let response = server.get("/stats").await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    assert!(body["retained_requests"].as_u64().unwrap() >= 1);
    assert!(body["peak_active_requests"].as_u64().unwrap() >= 1);
    assert_eq!(body["total_created_sessions"], 0);
    assert_eq!(body["peak_sessions"], 0);
    assert!(body["uptime_secs"].as_i64().unwrap() >= 0);
}

#[tokio::test]
async fn test_session_header_creates_live_session() {
    let ctx = TestContext::new();
    let server = TestServer::new(ctx.router.clone()).expect("Failed to create test server");

    let (name, value) = session_header("s1");
    server
        .get("/health")
        .add_header(name.clone(), value.clone())
        .await
        .assert_status_ok();
    server
        .get("/health")
        .add_header(name, value)
        .await
        .assert_status_ok();
    let (name, value) = session_header("s2");
    server
        .get("/health")
        .add_header(name, value)
        .await
        .assert_status_ok();

    let sessions: serde_json::Value = server.get("/sessions").await.json();
    let list = sessions.as_array().unwrap();
    assert_eq!(list.len(), 2);

    let s1 = list
        .iter()
        .find(|s| s["session_id"] == "s1")
        .expect("s1 should be live");
    assert_eq!(s1["request_count"], 2);

    let stats: serde_json::Value = server.get("/stats").await.json();
    assert_eq!(stats["total_created_sessions"], 2);
    assert_eq!(stats["peak_sessions"], 2);
    assert_eq!(stats["live_sessions"], 2);
}

#[tokio::test]
async fn test_requests_history_newest_first() {
    let ctx = TestContext::new();
    let server = TestServer::new(ctx.router.clone()).expect("Failed to create test server");

    server.get("/health").await.assert_status_ok();
    server.get("/sessions").await.assert_status_ok();

    let body: serde_json::Value = server.get("/requests").await.json();
    let list = body.as_array().unwrap();
    assert!(list.len() >= 2);

    // The most recent completed request tops the list
    assert_eq!(list[0]["event_target"], "GET /sessions");
    assert_eq!(list[1]["event_target"], "GET /health");
    assert!(list
        .iter()
        .all(|r| r["response_target"].as_str().unwrap().starts_with("status ")));
}

#[tokio::test]
async fn test_requests_limit_applies() {
    let ctx = TestContext::new();
    let server = TestServer::new(ctx.router.clone()).expect("Failed to create test server");

    for _ in 0..4 {
        server.get("/health").await.assert_status_ok();
    }

    let response = server.get("/requests").add_query_param("limit", 2).await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_requests_limit_validation() {
    let ctx = TestContext::new();
    let server = TestServer::new(ctx.router.clone()).expect("Failed to create test server");

    let response = server.get("/requests").add_query_param("limit", 0).await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["code"], "QUERY_001");

    let response = server
        .get("/requests")
        .add_query_param("limit", 100_000)
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_health_endpoints() {
    let ctx = TestContext::new();
    let server = TestServer::new(ctx.router.clone()).expect("Failed to create test server");

    let response = server.get("/health").await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert!(body.get("uptime_secs").is_some());
    assert!(body.get("active_requests").is_some());

    server.get("/health/live").await.assert_status_ok();
}
