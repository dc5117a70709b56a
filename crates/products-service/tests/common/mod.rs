#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use products_service::build_router;
use products_service_shared::test_utils::{test_state, TEST_API_KEY};
use products_service_shared::{AppState, API_KEY_HEADER};

/// Router over a fresh seeded state, plus a handle on that state.
pub fn app() -> (Router, AppState) {
    let state = test_state();
    (build_router(state.clone()), state)
}

/// Send a request and decode the JSON body (`Null` when empty).
pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("router is infallible");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };
    (status, body)
}

/// Send a request and return the status, content type and raw body text.
pub async fn send_raw(app: &Router, request: Request<Body>) -> (StatusCode, String, String) {
    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("router is infallible");
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    let text = String::from_utf8(bytes.to_vec()).expect("utf-8 body");
    (status, content_type, text)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("valid request")
}

/// Request with an optional API key and optional JSON body.
pub fn request(method: Method, uri: &str, api_key: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(key) = api_key {
        builder = builder.header(API_KEY_HEADER, key);
    }
    match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .expect("valid request"),
        None => builder.body(Body::empty()).expect("valid request"),
    }
}

/// Request authorized with the test API key.
pub fn authorized(method: Method, uri: &str, body: Option<Value>) -> Request<Body> {
    request(method, uri, Some(TEST_API_KEY), body)
}

pub fn kettle() -> Value {
    serde_json::json!({
        "name": "Kettle",
        "description": "Electric kettle",
        "price": 35,
        "category": "kitchen",
        "inStock": true
    })
}

pub fn names(products: &Value) -> Vec<String> {
    products
        .as_array()
        .expect("array of products")
        .iter()
        .map(|p| p["name"].as_str().expect("name").to_string())
        .collect()
}
