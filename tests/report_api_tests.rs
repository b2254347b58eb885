use axum::{
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use serde_json::{Value, json};
use staff_reports::config::ArtifactPaths;
use staff_reports::router::{ReportApiState, report_router};
use std::fs;
use std::path::Path;
use tower::ServiceExt;

fn artifacts_in(dir: &Path) -> ArtifactPaths {
    ArtifactPaths {
        top_resources: dir.join("top.json"),
        average_salary: dir.join("avg.json"),
        department_cost: dir.join("cost.json"),
    }
}

async fn get(paths: ArtifactPaths, uri: &str) -> (StatusCode, Value) {
    let app = report_router(ReportApiState::new(paths));
    let resp = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri(uri)
                .body(Body::empty())
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");

    let status = resp.status();
    let body = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    let value = serde_json::from_slice(&body).expect("response body was not json");
    (status, value)
}

#[tokio::test]
async fn missing_artifact_returns_error_envelope() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");

    let (status, body) = get(artifacts_in(dir.path()), "/json1").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.get("error").and_then(Value::as_str).is_some());
}

#[tokio::test]
async fn present_artifact_is_returned_verbatim() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let paths = artifacts_in(dir.path());
    let content = json!([
        {"resource": "Cement", "total_quantity": 35.0},
        {"resource": "Steel", "total_quantity": 30.0}
    ]);
    fs::write(&paths.top_resources, content.to_string()).expect("failed to write artifact");

    let (status, body) = get(paths, "/json1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, content);
}

#[tokio::test]
async fn each_route_serves_its_own_artifact() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let paths = artifacts_in(dir.path());
    fs::write(&paths.average_salary, r#"{"which":"avg"}"#).expect("failed to write artifact");
    fs::write(&paths.department_cost, r#"{"which":"cost"}"#).expect("failed to write artifact");

    let (status, body) = get(paths.clone(), "/json2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"which": "avg"}));

    let (status, body) = get(paths, "/json3").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"which": "cost"}));
}

#[tokio::test]
async fn corrupt_artifact_returns_error_envelope() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let paths = artifacts_in(dir.path());
    fs::write(&paths.department_cost, "{not json").expect("failed to write artifact");

    let (status, body) = get(paths, "/json3").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.get("error").is_some());
}
