//! Session flow and bearer-token tier resolution

use std::sync::Arc;

use axum::http::StatusCode;
use marquee_catalog::CatalogService;
use marquee_core::config::AccessConfig;
use marquee_core::{MarqueeConfig, Session, SessionError, SessionProvider};
use marquee_web::{AppState, build_router};
use serde_json::json;

use axum::body::Body;
use axum::http::{Method, Request, header};

use crate::harness::{get, get_as, ids, post_json, send, test_app};

async fn sign_in(app: &axum::Router, email: &str) -> String {
    let (status, session) = post_json(
        app,
        "/auth/sign-in",
        json!({ "email": email, "password": "anything" }),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    session["token"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_premium_session_unlocks_catalog() {
    let app = test_app();
    let token = sign_in(&app, "premium@example.com").await;

    let (_, content) = get_as(&app, "/content", Some(&token)).await;
    assert_eq!(ids(&content).len(), 12);

    let (status, _) = get_as(&app, "/content/5", Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_explicit_tier_param_overrides_session() {
    let app = test_app();
    let token = sign_in(&app, "premium@example.com").await;

    let (_, content) = get_as(&app, "/content?tier=basic", Some(&token)).await;
    assert_eq!(ids(&content), vec!["1", "4", "7", "10"]);
}

#[tokio::test]
async fn test_unknown_token_browses_as_default_tier() {
    let app = test_app();

    let (_, content) = get_as(&app, "/content", Some("not-a-session")).await;
    assert_eq!(ids(&content), vec!["1", "4", "7", "10"]);
}

#[tokio::test]
async fn test_sign_up_me_and_sign_out() {
    let app = test_app();

    let (status, session) = post_json(
        &app,
        "/auth/sign-up",
        json!({
            "email": "new@example.com",
            "password": "secret",
            "full_name": "New Viewer"
        }),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(session["user"]["subscription_tier"], "basic");
    let token = session["token"].as_str().unwrap().to_string();

    let (status, me) = get_as(&app, "/auth/me", Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(me["email"], "new@example.com");

    let (status, _) = post_json(&app, "/auth/sign-out", json!({}), Some(&token)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = get_as(&app, "/auth/me", Some(&token)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_sign_up_errors() {
    let app = test_app();

    let (status, _) = post_json(
        &app,
        "/auth/sign-up",
        json!({ "email": "premium@example.com", "password": "x", "full_name": "Dup" }),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = post_json(
        &app,
        "/auth/sign-up",
        json!({ "email": "not-an-email", "password": "x", "full_name": "Bad" }),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_bad_credentials_and_missing_token() {
    let app = test_app();

    let (status, body) = post_json(
        &app,
        "/auth/sign-in",
        json!({ "email": "nobody@example.com", "password": "x" }),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(body["error"].is_string());

    let (status, _) = get(&app, "/auth/me").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_malformed_sign_in_bodies_get_json_errors() {
    let app = test_app();

    let (status, body) = post_json(
        &app,
        "/auth/sign-in",
        json!({ "email": "test1@example.com" }),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].as_str().unwrap().contains("password"));

    let request = Request::builder()
        .method(Method::POST)
        .uri("/auth/sign-in")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"email\":"))
        .unwrap();
    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let request = Request::builder()
        .method(Method::POST)
        .uri("/auth/sign-up")
        .body(Body::from("email=a@b.co"))
        .unwrap();
    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert!(body["error"].is_string());
}

#[derive(Debug)]
struct OfflineSessionProvider;

#[async_trait::async_trait]
impl SessionProvider for OfflineSessionProvider {
    async fn current_session(&self, _token: &str) -> Result<Option<Session>, SessionError> {
        Err(SessionError::Transport {
            reason: "auth service offline".to_string(),
        })
    }

    async fn sign_in(&self, _email: &str, _password: &str) -> Result<Session, SessionError> {
        Err(SessionError::Transport {
            reason: "auth service offline".to_string(),
        })
    }

    async fn sign_up(
        &self,
        _email: &str,
        _password: &str,
        _full_name: &str,
    ) -> Result<Session, SessionError> {
        Err(SessionError::Transport {
            reason: "auth service offline".to_string(),
        })
    }

    async fn sign_out(&self, _token: &str) -> Result<(), SessionError> {
        Err(SessionError::Transport {
            reason: "auth service offline".to_string(),
        })
    }
}

#[tokio::test]
async fn test_offline_session_provider_degrades_to_default_tier() {
    let state = AppState::with_parts(
        MarqueeConfig::for_testing(),
        CatalogService::builtin(AccessConfig::default()),
        Arc::new(OfflineSessionProvider),
        Vec::new(),
    );
    let app = build_router(state);

    let (status, content) = get_as(&app, "/content", Some("any-token")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&content), vec!["1", "4", "7", "10"]);

    let (status, body) = get_as(&app, "/auth/me", Some("any-token")).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert!(!body["error"].as_str().unwrap().contains("offline"));
}
