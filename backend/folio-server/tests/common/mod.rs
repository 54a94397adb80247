#![allow(dead_code)]

//! Test infrastructure for folio-server API tests

use folio_cms::{AppState, LogNotifier};
use folio_config::ValidationConfig;
use folio_server::build_router;

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

/// AppState over a fresh in-memory database
pub async fn create_test_app_state() -> AppState {
    let pool = folio_db::connect_in_memory()
        .await
        .expect("Failed to create test database");

    AppState::new(pool, ValidationConfig::default(), Arc::new(LogNotifier))
}

/// Send one request through a clone of the router and decode the JSON body.
///
/// Empty bodies decode to `Value::Null`.
pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    (status, json)
}

pub async fn create_project(app: &Router, slug: &str) -> String {
    let (status, json) = send(
        app,
        "POST",
        "/api/v1/projects",
        Some(json!({ "slug": slug, "title": format!("Project {}", slug) })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    json["project"]["id"].as_str().unwrap().to_string()
}

pub async fn create_image(app: &Router, project_id: &str, url: &str) -> Value {
    let (status, json) = send(
        app,
        "POST",
        &format!("/api/v1/projects/{}/images", project_id),
        Some(json!({ "url": url })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    json["image"].clone()
}

pub async fn create_post(app: &Router, project_id: &str, slug: &str) -> Value {
    let (status, json) = send(
        app,
        "POST",
        &format!("/api/v1/projects/{}/posts", project_id),
        Some(json!({ "slug": slug, "title": format!("Post {}", slug), "content": "body" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    json["post"].clone()
}

/// Ids of a listed collection in display order
pub fn ids_of(items: &Value) -> Vec<String> {
    items
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["id"].as_str().unwrap().to_string())
        .collect()
}

pub fn orders_of(items: &Value) -> Vec<i64> {
    items
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["order"].as_i64().unwrap())
        .collect()
}
