//! End-to-end recording: logger notifications surfacing in the viewer.

use std::time::Duration;

use axum_test::TestServer;
use integration_tests::{fixtures, setup::TestContext};
use recorder::{RequestLogger, SessionSweeper, SweeperConfig};

#[tokio::test]
async fn test_store_churn_shows_in_history() {
    let ctx = TestContext::new();
    let server = TestServer::new(ctx.router.clone()).expect("Failed to create test server");

    ctx.logger.session_created("s1");
    let id = ctx.logger.request_started();
    ctx.logger.log_event_target(id, "checkout worker");
    ctx.logger
        .bind_session(id, "s1", 512, Some(fixtures::user_info("alice")));
    ctx.logger.object_created(id, &fixtures::attribute("cart", 64));
    ctx.logger.object_updated(id, &fixtures::attribute("cart", 96));
    ctx.logger.log_response_target(id, "render complete");
    ctx.logger.request_completed(id, Duration::from_millis(75));

    let body: serde_json::Value = server.get("/requests").await.json();
    let record = &body.as_array().unwrap()[0];
    assert_eq!(record["event_target"], "checkout worker");
    assert_eq!(record["response_target"], "render complete");
    assert_eq!(record["session_id"], "s1");
    assert_eq!(record["session_size_bytes"], 512);
    assert_eq!(record["time_taken_ms"], 75);
    assert_eq!(record["session_info"]["user_id"], "alice");

    let entries = record["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0], "created cart (64 bytes)");
    assert_eq!(entries[1], "updated cart (96 bytes)");

    let sessions: serde_json::Value = server.get("/sessions").await.json();
    let session = &sessions.as_array().unwrap()[0];
    assert_eq!(session["session_id"], "s1");
    assert_eq!(session["request_count"], 1);
    assert_eq!(session["total_time_taken_ms"], 75);
    assert_eq!(session["session_size_bytes"], 512);
}

#[tokio::test]
async fn test_history_window_bounds_viewer_output() {
    let ctx = TestContext::with_window(2);
    let server = TestServer::new(ctx.router.clone()).expect("Failed to create test server");

    for took in [10, 20, 30] {
        fixtures::record_session_request(ctx.logger.as_ref(), "s1", took);
    }

    let body: serde_json::Value = server.get("/requests").await.json();
    let list = body.as_array().unwrap();
    assert_eq!(list.len(), 2);
    // Newest first; the 10ms request was evicted
    assert_eq!(list[0]["time_taken_ms"], 30);
    assert_eq!(list[1]["time_taken_ms"], 20);
}

#[tokio::test]
async fn test_sweeper_clears_idle_sessions_from_viewer() {
    let ctx = TestContext::new();
    let server = TestServer::new(ctx.router.clone()).expect("Failed to create test server");

    ctx.logger.session_created("s1");
    ctx.logger.session_created("s2");

    let sweeper = SessionSweeper::new(ctx.logger.clone(), SweeperConfig::default());
    let destroyed = sweeper.sweep_at(chrono::Utc::now() + chrono::Duration::minutes(31));
    assert_eq!(destroyed, 2);

    let sessions: serde_json::Value = server.get("/sessions").await.json();
    assert!(sessions.as_array().unwrap().is_empty());

    // Destroyed sessions still count toward the total
    let stats: serde_json::Value = server.get("/stats").await.json();
    assert_eq!(stats["total_created_sessions"], 2);
    assert_eq!(stats["live_sessions"], 0);
}
