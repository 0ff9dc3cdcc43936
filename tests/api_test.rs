mod common;

use common::UnavailableStore;
use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use research_pro::{
    api::{build_router, AppState},
    config::Config,
    state::{seed_store, InMemoryStore, ResearchStore},
};
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

const TOKEN: &str = "test-token";

fn app_with_store(store: Arc<dyn ResearchStore>) -> Router {
    let state = AppState::new(store, &Config::default()).with_token(TOKEN);
    build_router(state, Duration::from_secs(5))
}

fn app() -> Router {
    app_with_store(Arc::new(InMemoryStore::new()))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("X-API-Token", TOKEN);

    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app.clone().oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, value)
}

#[tokio::test]
async fn test_health_needs_no_token() {
    let response = app()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body, json!({"status": "ok"}));
}

#[tokio::test]
async fn test_missing_and_invalid_token_rejected() {
    let app = app();

    let missing = app
        .clone()
        .oneshot(Request::builder().uri("/api/v1/topics").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(missing.status(), StatusCode::UNAUTHORIZED);
    let bytes = to_bytes(missing.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["error"]["code"], "AUTHENTICATION_ERROR");

    let invalid = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/dashboard")
                .header("X-API-Token", "wrong")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(invalid.status(), StatusCode::UNAUTHORIZED);
    let bytes = to_bytes(invalid.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("Invalid API token"));
}

#[tokio::test]
async fn test_topic_lifecycle() {
    let app = app();

    let (status, created) = send(
        &app,
        Method::POST,
        "/api/v1/topics",
        Some(json!({"name": "AI Adoption", "category": "market", "description": "Enterprise uptake"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["status"], "active");
    let id = created["id"].as_i64().unwrap();

    let (status, patched) = send(
        &app,
        Method::PATCH,
        &format!("/api/v1/topics/{}", id),
        Some(json!({"status": "paused", "description": null})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(patched["status"], "paused");
    assert_eq!(patched["description"], Value::Null);
    assert_eq!(patched["category"], "market");

    let (status, listed) = send(&app, Method::GET, "/api/v1/topics?status=paused", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed.as_array().unwrap().len(), 1);

    let (status, _) = send(&app, Method::DELETE, &format!("/api/v1/topics/{}", id), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = send(&app, Method::GET, &format!("/api/v1/topics/{}", id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_create_validation_errors() {
    let app = app();

    let (status, body) = send(&app, Method::POST, "/api/v1/topics", Some(json!({"name": ""}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

    let (status, _) = send(&app, Method::POST, "/api/v1/notes", Some(json!({"author": "x"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_insight_requires_existing_topic() {
    let app = app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/insights",
        Some(json!({"topic_id": 99, "title": "Orphan"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"]["message"].as_str().unwrap().contains("Topic not found"));

    let (_, topic) = send(&app, Method::POST, "/api/v1/topics", Some(json!({"name": "Quantum"}))).await;
    let topic_id = topic["id"].as_i64().unwrap();

    let (status, insight) = send(
        &app,
        Method::POST,
        "/api/v1/insights",
        Some(json!({"topic_id": topic_id, "title": "Quantum leap"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let insight_id = insight["id"].as_i64().unwrap();

    let (status, _) = send(
        &app,
        Method::PATCH,
        &format!("/api/v1/insights/{}", insight_id),
        Some(json!({"topic_id": 1234})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, listed) = send(
        &app,
        Method::GET,
        &format!("/api/v1/topics/{}/insights?status=hypothesis", topic_id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed.as_array().unwrap().len(), 1);

    let (status, _) = send(&app, Method::GET, "/api/v1/topics/4242/sources", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_source_patch_and_filters() {
    let app = app();

    let (status, created) = send(
        &app,
        Method::POST,
        "/api/v1/sources",
        Some(json!({"title": "Gartner Hype Cycle", "type": "report", "credibility": "high"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["type"], "report");
    assert_eq!(created["summary"], Value::Null);
    let id = created["id"].as_i64().unwrap();

    let (status, patched) = send(
        &app,
        Method::PATCH,
        &format!("/api/v1/sources/{}", id),
        Some(json!({"summary": "Agentic AI emerging"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(patched["summary"], "Agentic AI emerging");
    assert_eq!(patched["title"], "Gartner Hype Cycle");

    let (_, reports) = send(&app, Method::GET, "/api/v1/sources?type=report&topic_id=", None).await;
    assert_eq!(reports.as_array().unwrap().len(), 1);

    let (_, papers) = send(&app, Method::GET, "/api/v1/sources?type=paper", None).await;
    assert!(papers.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_list_limit_bounds() {
    let app = app();

    let (status, body) = send(&app, Method::GET, "/api/v1/notes?limit=0", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

    let (status, _) = send(&app, Method::GET, "/api/v1/notes?limit=201", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, Method::GET, "/api/v1/notes?limit=200&offset=5", None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_search_endpoint() {
    let store: Arc<dyn ResearchStore> = Arc::new(InMemoryStore::new());
    seed_store(store.as_ref()).await.unwrap();
    let app = app_with_store(store);

    let (status, body) = send(&app, Method::GET, "/api/v1/search?q=", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

    let (status, body) = send(&app, Method::GET, "/api/v1/search?q=McKinsey&limit=2", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["query"], "McKinsey");
    assert!(body["total"].as_u64().unwrap() >= 2);
    let results = body["results"].as_array().unwrap();
    assert_eq!(results.len(), 2);
    assert!(results.iter().all(|hit| hit["result_type"].is_string()));
}

#[tokio::test]
async fn test_dashboard_endpoint() {
    let store: Arc<dyn ResearchStore> = Arc::new(InMemoryStore::new());
    seed_store(store.as_ref()).await.unwrap();
    let app = app_with_store(store);

    let (status, body) = send(&app, Method::GET, "/api/v1/dashboard", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["active_topics_count"], 2);
    assert_eq!(body["total_sources"], 6);
    assert_eq!(body["unreviewed_sources_count"], 2);
    assert_eq!(body["recent_insights"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_collection_crud() {
    let app = app();

    let (status, created) = send(
        &app,
        Method::POST,
        "/api/v1/collections",
        Some(json!({"name": "Deep Tech Watch", "topic_ids": [2], "shared": false})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_i64().unwrap();

    let (status, patched) = send(
        &app,
        Method::PATCH,
        &format!("/api/v1/collections/{}", id),
        Some(json!({"shared": true, "source_ids": [3]})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(patched["shared"], true);
    assert_eq!(patched["topic_ids"], json!([2]));

    let (_, shared) = send(&app, Method::GET, "/api/v1/collections?shared=true", None).await;
    assert_eq!(shared.as_array().unwrap().len(), 1);

    let (status, _) = send(&app, Method::DELETE, &format!("/api/v1/collections/{}", id), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = send(&app, Method::DELETE, &format!("/api/v1/collections/{}", id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_store_failure_returns_503() {
    let app = app_with_store(Arc::new(UnavailableStore));

    let (status, body) = send(&app, Method::GET, "/api/v1/search?q=x", None).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["error"]["code"], "STORE_UNAVAILABLE");

    let (status, _) = send(&app, Method::GET, "/api/v1/dashboard", None).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
}
