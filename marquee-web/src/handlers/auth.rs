//! Session handlers backed by the configured `SessionProvider`

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::Json;
use marquee_core::{Session, UserAccount};
use serde::Deserialize;

use super::extract::ApiJson;
use super::viewer::bearer_token;
use crate::error::ApiError;
use crate::server::AppState;

#[derive(Debug, Deserialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct SignUpRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
}

pub async fn api_sign_in(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<SignInRequest>,
) -> Result<Json<Session>, ApiError> {
    let session = state
        .sessions
        .sign_in(&request.email, &request.password)
        .await?;

    tracing::info!("Signed in {}", session.user.email);
    Ok(Json(session))
}

pub async fn api_sign_up(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<SignUpRequest>,
) -> Result<(StatusCode, Json<Session>), ApiError> {
    let session = state
        .sessions
        .sign_up(&request.email, &request.password, &request.full_name)
        .await?;

    tracing::info!("Created account {}", session.user.email);
    Ok((StatusCode::CREATED, Json(session)))
}

pub async fn api_sign_out(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<StatusCode, ApiError> {
    let token = bearer_token(&headers).ok_or(ApiError::Unauthorized)?;
    state.sessions.sign_out(token).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn api_me(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<UserAccount>, ApiError> {
    let token = bearer_token(&headers).ok_or(ApiError::Unauthorized)?;

    match state.sessions.current_session(token).await? {
        Some(session) => Ok(Json(session.user)),
        None => Err(ApiError::Unauthorized),
    }
}
