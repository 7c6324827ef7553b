//! HTTP-facing error types.

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use marquee_catalog::CatalogError;
use marquee_core::{SessionError, SubscriptionTier};
use serde_json::json;

/// Errors returned by API handlers.
///
/// Rendered as `{"error": "<message>"}` with a matching status code.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Content not found: {id}")]
    ContentNotFound { id: String },

    #[error("This title requires the {required} plan")]
    UpgradeRequired { required: SubscriptionTier },

    #[error("Not signed in")]
    Unauthorized,

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error("Invalid request body: {}", .0.body_text())]
    InvalidBody(#[from] JsonRejection),

    #[error("Invalid query string: {}", .0.body_text())]
    InvalidQuery(#[from] QueryRejection),

    #[error("Invalid path: {}", .0.body_text())]
    InvalidPath(#[from] PathRejection),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::ContentNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::UpgradeRequired { .. } => StatusCode::FORBIDDEN,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::Session(e) => match e {
                SessionError::InvalidCredentials | SessionError::SessionNotFound => {
                    StatusCode::UNAUTHORIZED
                }
                SessionError::EmailTaken { .. } => StatusCode::CONFLICT,
                SessionError::InvalidEmail { .. } => StatusCode::UNPROCESSABLE_ENTITY,
                SessionError::Transport { .. } => StatusCode::SERVICE_UNAVAILABLE,
            },
            ApiError::InvalidBody(rejection) => rejection.status(),
            ApiError::InvalidQuery(rejection) => rejection.status(),
            ApiError::InvalidPath(rejection) => rejection.status(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            ApiError::Session(SessionError::Transport { reason }) => {
                tracing::error!("Session provider failure: {reason}");
                "Sign-in is temporarily unavailable".to_string()
            }
            other => other.to_string(),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Errors that stop the server from starting or running.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Catalog setup failed: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Failed to serve on {address}: {source}")]
    Bind {
        address: std::net::SocketAddr,
        source: std::io::Error,
    },

    #[error("Server I/O error: {0}")]
    Io(#[from] std::io::Error),
}
