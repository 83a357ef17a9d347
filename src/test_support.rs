//! Helpers for driving the full router in tests.

use axum::{
    body::{Body, Bytes},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use crate::{app::build_app, state::AppState};

pub async fn test_app() -> (Router, AppState) {
    let state = AppState::fake().await;
    (build_app(state.clone()), state)
}

pub async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Bytes) {
    let res = app.clone().oneshot(req).await.unwrap();
    let status = res.status();
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, bytes)
}

async fn send_json(app: &Router, method: Method, uri: &str, body: Value) -> (StatusCode, Value) {
    let req = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let (status, bytes) = send(app, req).await;
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

pub async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send_json(app, Method::POST, uri, body).await
}

pub async fn put_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send_json(app, Method::PUT, uri, body).await
}

pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let (status, text) = get_text(app, uri).await;
    (status, serde_json::from_str(&text).unwrap_or(Value::Null))
}

pub async fn get_text(app: &Router, uri: &str) -> (StatusCode, String) {
    let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let (status, bytes) = send(app, req).await;
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

pub async fn create_user(app: &Router, name: &str) -> i64 {
    let (status, body) = post_json(app, "/users", json!({ "name": name })).await;
    assert_eq!(status, StatusCode::CREATED, "create user: {body}");
    body["id"].as_i64().unwrap()
}

/// Macros are per 100 g.
pub async fn create_food(app: &Router, name: &str, protein: f64, carbs: f64, fat: f64, kcal: f64) -> i64 {
    let (status, body) = post_json(
        app,
        "/foods",
        json!({
            "name": name,
            "protein_g": protein,
            "carbs_g": carbs,
            "fat_g": fat,
            "kcal": kcal,
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "create food: {body}");
    body["id"].as_i64().unwrap()
}

pub fn assert_close(actual: &Value, expected: f64) {
    let a = actual.as_f64().unwrap_or_else(|| panic!("not a number: {actual}"));
    assert!((a - expected).abs() < 1e-6, "expected {expected}, got {a}");
}
