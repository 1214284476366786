//! Tests for the reqwest backend against an in-process axum server.

#![cfg(feature = "http")]

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post, put},
};
use postgen_core::{GenerateRequest, NewEventBuilder, Platform, PostStatus, Tone};
use postgen_error::PostgenErrorKind;
use postgen_ui::{ApiConfig, HttpBackend, PostgenApi};
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Requests seen by the server: `METHOD path[?query] [body]`.
type Log = Arc<Mutex<Vec<String>>>;

async fn list_events(State(log): State<Log>) -> Json<Value> {
    log.lock().unwrap().push("GET /api/events".to_string());
    Json(json!({
        "success": true,
        "events": [
            {"id": 2, "title": "Launch", "date": "2025-05-20", "location": "Berlin", "type": "launch", "description": ""},
            {"id": 1, "title": "Webinar", "date": "2025-04-01"}
        ]
    }))
}

async fn create_event(State(log): State<Log>, Json(body): Json<Value>) -> Json<Value> {
    log.lock().unwrap().push(format!("POST /api/events {}", body));
    Json(json!({"success": true, "message": "Event created successfully", "event_id": 5}))
}

async fn delete_event(State(log): State<Log>, Path(id): Path<i64>) -> (StatusCode, Json<Value>) {
    log.lock().unwrap().push(format!("DELETE /api/events/{}", id));
    if id == 404 {
        (
            StatusCode::NOT_FOUND,
            Json(json!({"success": false, "error": "Event not found"})),
        )
    } else {
        (StatusCode::OK, Json(json!({"success": true})))
    }
}

async fn list_posts(
    State(log): State<Log>,
    Query(query): Query<HashMap<String, String>>,
) -> Json<Value> {
    let entry = match query.get("event_id") {
        Some(id) => format!("GET /api/posts?event_id={}", id),
        None => "GET /api/posts".to_string(),
    };
    log.lock().unwrap().push(entry);
    Json(json!({
        "success": true,
        "posts": [{
            "id": 9,
            "event_id": 2,
            "event_title": "Launch",
            "platform": "twitter",
            "tone": "friendly",
            "content": "We launched!",
            "hashtags": null,
            "status": "approved",
            "created_at": "2025-05-21T09:00:00"
        }]
    }))
}

async fn generate_post(State(log): State<Log>, Json(body): Json<Value>) -> Json<Value> {
    log.lock().unwrap().push(format!("POST /api/generate-post {}", body));
    Json(json!({
        "success": true,
        "post_id": 12,
        "content": "Join us at the launch",
        "hashtags": "#launch #rust"
    }))
}

async fn update_post(
    State(log): State<Log>,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> Json<Value> {
    log.lock().unwrap().push(format!("PUT /api/posts/{} {}", id, body));
    Json(json!({"success": true}))
}

async fn delete_post(State(log): State<Log>, Path(id): Path<i64>) -> Json<Value> {
    log.lock().unwrap().push(format!("DELETE /api/posts/{}", id));
    Json(json!({"success": true}))
}

/// Start a server on an ephemeral port and return its base URL.
async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Bind test listener");
    let addr = listener.local_addr().expect("Local address");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("Test server");
    });
    format!("http://{}", addr)
}

async fn backend() -> (HttpBackend, Log) {
    let log = Log::default();
    let router = Router::new()
        .route("/api/events", get(list_events).post(create_event))
        .route("/api/events/:id", delete(delete_event))
        .route("/api/posts", get(list_posts))
        .route("/api/posts/:id", put(update_post).delete(delete_post))
        .route("/api/generate-post", post(generate_post))
        .with_state(log.clone());
    let base_url = serve(router).await;
    (HttpBackend::new(format!("{}/", base_url)), log)
}

fn entries(log: &Log) -> Vec<String> {
    log.lock().unwrap().clone()
}

#[tokio::test]
async fn test_list_events() {
    let (api, log) = backend().await;

    let events = api.list_events().await.unwrap();

    assert_eq!(events.len(), 2);
    assert_eq!(events[0].kind(), Some("launch"));
    assert_eq!(events[0].description(), None);
    assert_eq!(entries(&log), vec!["GET /api/events"]);
}

#[tokio::test]
async fn test_create_event_sends_form_fields() {
    let (api, log) = backend().await;
    let event = NewEventBuilder::default()
        .title("Launch")
        .date("2025-05-20")
        .kind("launch")
        .build()
        .unwrap();

    let created = api.create_event(&event).await.unwrap();
    assert_eq!(created.event_id, Some(5));

    let entry = &entries(&log)[0];
    let body: Value = serde_json::from_str(entry.trim_start_matches("POST /api/events ")).unwrap();
    assert_eq!(
        body,
        json!({"title": "Launch", "date": "2025-05-20", "location": "", "type": "launch", "description": ""})
    );
}

#[tokio::test]
async fn test_delete_event_paths_and_server_error() {
    let (api, log) = backend().await;

    api.delete_event(3).await.unwrap();
    let err = api.delete_event(404).await.unwrap_err();

    assert!(err.is_api());
    assert_eq!(err.message(), "Event not found");
    assert_eq!(
        entries(&log),
        vec!["DELETE /api/events/3", "DELETE /api/events/404"]
    );
}

#[tokio::test]
async fn test_list_posts_with_and_without_filter() {
    let (api, log) = backend().await;

    let posts = api.list_posts(None).await.unwrap();
    api.list_posts(Some(2)).await.unwrap();

    assert_eq!(posts[0].status, PostStatus::Approved);
    assert_eq!(posts[0].hashtags(), None);
    assert_eq!(
        entries(&log),
        vec!["GET /api/posts", "GET /api/posts?event_id=2"]
    );
}

#[tokio::test]
async fn test_generate_post_body() {
    let (api, log) = backend().await;
    let request = GenerateRequest {
        event_id: 2,
        platform: Platform::Facebook,
        tone: Tone::Promotional,
    };

    let generated = api.generate_post(&request).await.unwrap();
    assert_eq!(generated.post_id, 12);
    assert_eq!(generated.hashtags.as_deref(), Some("#launch #rust"));

    let entry = &entries(&log)[0];
    let body: Value =
        serde_json::from_str(entry.trim_start_matches("POST /api/generate-post ")).unwrap();
    assert_eq!(
        body,
        json!({"event_id": 2, "platform": "facebook", "tone": "promotional"})
    );
}

#[tokio::test]
async fn test_update_and_delete_post() {
    let (api, log) = backend().await;

    api.update_post_status(9, PostStatus::Posted).await.unwrap();
    api.delete_post(9).await.unwrap();

    assert_eq!(
        entries(&log),
        vec![r#"PUT /api/posts/9 {"status":"posted"}"#, "DELETE /api/posts/9"]
    );
}

#[tokio::test]
async fn test_non_json_body_is_parse_error() {
    let router = Router::new().route(
        "/api/events",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error") }),
    );
    let api = HttpBackend::new(serve(router).await);

    let err = api.list_events().await.unwrap_err();
    assert!(!err.is_api());
    assert!(matches!(err.kind(), PostgenErrorKind::Json(_)));
}

#[tokio::test]
async fn test_unreachable_server_is_http_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let api = HttpBackend::from_config(&ApiConfig::new(format!("http://{}", addr)));
    let err = api.list_events().await.unwrap_err();

    assert!(matches!(err.kind(), PostgenErrorKind::Http(_)));
    assert!(err.message().starts_with("Request failed"));
}
