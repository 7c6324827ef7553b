//! Shared helpers for driving the router in tests

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use marquee_core::MarqueeConfig;
use marquee_web::{AppState, build_router};
use serde_json::Value;
use tower::ServiceExt;

pub fn test_app() -> Router {
    app_with_config(MarqueeConfig::for_testing())
}

pub fn app_with_config(config: MarqueeConfig) -> Router {
    build_router(AppState::new(config).unwrap())
}

pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    get_as(app, uri, None).await
}

pub async fn get_as(app: &Router, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(Method::GET).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    send(app, builder.body(Body::empty()).unwrap()).await
}

pub async fn post_json(
    app: &Router,
    uri: &str,
    body: Value,
    token: Option<&str>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    send(app, builder.body(Body::from(body.to_string())).unwrap()).await
}

/// Ids of a JSON array of content items.
pub fn ids(items: &Value) -> Vec<String> {
    items
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["id"].as_str().unwrap().to_string())
        .collect()
}

pub fn search_uri(query: &str, extra: &str) -> String {
    format!("/search?q={}{extra}", urlencoding::encode(query))
}
