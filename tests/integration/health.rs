//! Health, metrics, docs and static file integration tests

use std::fs;

use axum::http::StatusCode;
use serde_json::{json, Value};

use crate::common::{constants, test_config, Reply, ScriptedHarness};

fn harness() -> ScriptedHarness {
    ScriptedHarness::new(Reply::Body(json!({ "text": "unused" })))
}

#[tokio::test]
async fn test_health_endpoint_returns_proper_structure() {
    let harness = harness();

    let response = harness.server.get("/health").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(body["model"], "scripted");
    assert_eq!(body["prompt"], "variable-names");
    assert!(body["uptime_seconds"].is_u64());
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_liveness_probe() {
    let harness = harness();

    let response = harness.server.get("/health/live").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!({ "status": "healthy" }));
}

#[tokio::test]
async fn test_health_does_not_call_model() {
    let harness = harness();

    harness.server.get("/health").await.assert_status_ok();
    assert_eq!(harness.model.call_count(), 0);
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let harness = harness();

    let response = harness.server.get("/openapi.json").await;

    response.assert_status_ok();
    let doc: Value = response.json();
    assert!(doc["paths"]["/review"]["post"].is_object());
    assert_eq!(doc["info"]["title"], "Snippet Review API");
}

#[tokio::test]
async fn test_metrics_endpoint_renders() {
    let harness = harness();

    harness
        .server
        .post("/review")
        .json(&json!({ "code": constants::SAMPLE_CODE }))
        .await
        .assert_status_ok();

    harness.server.get("/metrics").await.assert_status_ok();
}

#[tokio::test]
async fn test_unknown_path_without_static_dir() {
    let harness = harness();

    let response = harness.server.get("/index.html").await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_static_dir_is_served() {
    let dir = std::env::temp_dir().join(format!("snippet-review-static-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("index.html"), "<h1>AI Code Reviewer</h1>").unwrap();

    let harness = ScriptedHarness::with_config(
        Reply::Body(json!({ "text": "unused" })),
        test_config(&[("STATIC_DIR", dir.to_str().unwrap())]),
    );

    let response = harness.server.get("/index.html").await;
    response.assert_status_ok();
    assert!(response.text().contains("AI Code Reviewer"));

    // API routes still win over the fallback
    harness.server.get("/health/live").await.assert_status_ok();

    fs::remove_dir_all(&dir).ok();
}
