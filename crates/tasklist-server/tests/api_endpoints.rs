//! Integration tests for the HTTP surface, driven through the router with
//! `oneshot` (no socket).

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use rstest::rstest;
use serde_json::{Value, json};
use tower::ServiceExt;

use tasklist_server::{AppState, create_router};

fn create_test_app() -> Router {
    create_router(AppState::in_memory())
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    };
    (status, json)
}

fn post_json(body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/tasks")
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .unwrap()
}

fn empty(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn create(app: &Router, body: Value) -> Value {
    let (status, task) = send(app, post_json(body.to_string())).await;
    assert_eq!(status, StatusCode::CREATED);
    task
}

#[tokio::test]
async fn health_check_returns_healthy() {
    let app = create_test_app();
    let (status, body) = send(&app, empty("GET", "/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn index_serves_html() {
    let app = create_test_app();
    let response = app.oneshot(empty("GET", "/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
    assert!(content_type.starts_with("text/html"));

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let html = String::from_utf8(body.to_vec()).unwrap();
    assert!(html.contains("/api/tasks"));
}

#[tokio::test]
async fn list_starts_empty() {
    let app = create_test_app();
    let (status, body) = send(&app, empty("GET", "/api/tasks")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn create_returns_201_with_task_shape() {
    let app = create_test_app();
    let (status, task) = send(
        &app,
        post_json(r##"{"title":"Buy milk","priority":"🔥","color":"#dc3545"}"##),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(task["id"], "1");
    assert_eq!(task["title"], "Buy milk");
    assert_eq!(task["completed"], false);
    assert_eq!(task["priority"], "🔥");
    assert_eq!(task["color"], "#dc3545");
    let created_at = task["createdAt"].as_str().unwrap();
    let parsed = chrono::DateTime::parse_from_rfc3339(created_at).unwrap();
    assert_eq!(parsed.offset().local_minus_utc(), 0);
}

#[tokio::test]
async fn create_accepts_json_without_content_type() {
    let app = create_test_app();
    let request = Request::builder()
        .method("POST")
        .uri("/api/tasks")
        .body(Body::from(r#"{"title":"x"}"#))
        .unwrap();

    let (status, task) = send(&app, request).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(task["title"], "x");
}

#[tokio::test]
async fn create_applies_defaults() {
    let app = create_test_app();
    let task = create(&app, json!({ "title": "x" })).await;
    assert_eq!(task["priority"], "📋");
    assert_eq!(task["color"], "#6c757d");

    let task = create(&app, json!({ "title": "y", "priority": "⚡" })).await;
    assert_eq!(task["priority"], "⚡");
    assert_eq!(task["color"], "#6c757d");
}

#[rstest]
#[case::empty_title(json!({ "title": "" }), "Task title cannot be empty")]
#[case::blank_title(json!({ "title": "   " }), "Task title cannot be empty")]
#[case::missing_title(json!({}), "Task title cannot be empty")]
#[case::invalid_priority(
    json!({ "title": "x", "priority": "not-a-marker" }),
    "Invalid priority emoticon. Must be one of: 🔥, ⭐, ⚡, 💡, 📋"
)]
#[case::invalid_color(
    json!({ "title": "x", "priority": "🔥", "color": "#notahex" }),
    "Invalid color code. Must be one of: #dc3545, #0d6efd, #ffc107, #28a745, #6f42c1, #fd7e14, #6c757d"
)]
#[tokio::test]
async fn create_rejects_invalid_input(#[case] body: Value, #[case] message: &str) {
    let app = create_test_app();
    let (status, error) = send(&app, post_json(body.to_string())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "INVALID_INPUT");
    assert_eq!(error["error"], message);

    let (_, tasks) = send(&app, empty("GET", "/api/tasks")).await;
    assert_eq!(tasks, json!([]));
}

#[tokio::test]
async fn create_rejects_long_title() {
    let app = create_test_app();
    let (status, error) = send(&app, post_json(json!({ "title": "a".repeat(256) }).to_string())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "INVALID_INPUT");

    create(&app, json!({ "title": "a".repeat(255) })).await;
}

#[rstest]
#[case::not_json("not json")]
#[case::wrong_type(r#"{"title": 5}"#)]
#[tokio::test]
async fn create_rejects_undecodable_body(#[case] body: &'static str) {
    let app = create_test_app();
    let (status, error) = send(&app, post_json(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error, json!({ "error": "Invalid request body", "code": "INVALID_INPUT" }));
}

#[tokio::test]
async fn toggle_flips_completed_back_and_forth() {
    let app = create_test_app();
    let task = create(&app, json!({ "title": "x" })).await;
    let uri = format!("/api/tasks/{}/toggle", task["id"].as_str().unwrap());

    let (status, toggled) = send(&app, empty("PATCH", &uri)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(toggled["completed"], true);
    assert_eq!(toggled["priority"], task["priority"]);
    assert_eq!(toggled["createdAt"], task["createdAt"]);

    let (_, toggled) = send(&app, empty("PATCH", &uri)).await;
    assert_eq!(toggled["completed"], false);
}

#[rstest]
#[case::unknown_id("/api/tasks/999/toggle")]
#[case::non_numeric_id("/api/tasks/abc/toggle")]
#[tokio::test]
async fn toggle_unknown_task_is_404(#[case] uri: &str) {
    let app = create_test_app();
    let (status, error) = send(&app, empty("PATCH", uri)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error, json!({ "error": "Task not found", "code": "NOT_FOUND" }));
}

#[rstest]
#[case::toggle_leading_zero("PATCH", "/api/tasks/01/toggle")]
#[case::toggle_plus_sign("PATCH", "/api/tasks/+1/toggle")]
#[case::delete_padded("DELETE", "/api/tasks/+01")]
#[case::delete_zeros("DELETE", "/api/tasks/0001")]
#[tokio::test]
async fn id_must_match_exactly(#[case] method: &str, #[case] uri: &str) {
    let app = create_test_app();
    let task = create(&app, json!({ "title": "x" })).await;
    assert_eq!(task["id"], "1");

    let (status, error) = send(&app, empty(method, uri)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error["code"], "NOT_FOUND");

    let (_, tasks) = send(&app, empty("GET", "/api/tasks")).await;
    assert_eq!(tasks, json!([task]));
}

#[tokio::test]
async fn delete_removes_exactly_one() {
    let app = create_test_app();
    let first = create(&app, json!({ "title": "a" })).await;
    let second = create(&app, json!({ "title": "b" })).await;
    let third = create(&app, json!({ "title": "c" })).await;
    let uri = format!("/api/tasks/{}", second["id"].as_str().unwrap());

    let (status, body) = send(&app, empty("DELETE", &uri)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Task deleted successfully" }));

    let (_, tasks) = send(&app, empty("GET", "/api/tasks")).await;
    assert_eq!(tasks, json!([first, third]));

    let (status, error) = send(&app, empty("DELETE", &uri)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error["code"], "NOT_FOUND");
}

#[tokio::test]
async fn end_to_end_scenario() {
    let app = create_test_app();
    let task = create(
        &app,
        json!({ "title": "Buy milk", "priority": "🔥", "color": "#dc3545" }),
    )
    .await;
    let id = task["id"].as_str().unwrap().to_string();

    let (_, toggled) = send(&app, empty("PATCH", &format!("/api/tasks/{id}/toggle"))).await;
    assert_eq!(toggled["completed"], true);

    let (status, _) = send(&app, empty("DELETE", &format!("/api/tasks/{id}"))).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&app, empty("PATCH", &format!("/api/tasks/{id}/toggle"))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_creates_yield_unique_ids() {
    const N: usize = 100;
    let app = create_test_app();

    let handles: Vec<_> = (0..N)
        .map(|i| {
            let app = app.clone();
            tokio::spawn(async move { create(&app, json!({ "title": format!("task {i}") })).await })
        })
        .collect();
    for handle in handles {
        handle.await.unwrap();
    }

    let (_, tasks) = send(&app, empty("GET", "/api/tasks")).await;
    let tasks = tasks.as_array().unwrap();
    assert_eq!(tasks.len(), N);
    let mut ids: Vec<&str> = tasks.iter().map(|t| t["id"].as_str().unwrap()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), N);
}
