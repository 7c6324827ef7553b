//! Account listing, plan and health handlers

use axum::extract::State;
use axum::response::Json;
use marquee_core::{Plan, UserAccount};
use serde_json::json;

use crate::server::AppState;

pub async fn api_users(State(state): State<AppState>) -> Json<Vec<UserAccount>> {
    Json(state.users.to_vec())
}

pub async fn api_plans(State(state): State<AppState>) -> Json<Vec<Plan>> {
    Json(state.plans.to_vec())
}

pub async fn api_health(State(state): State<AppState>) -> Json<serde_json::Value> {
    let catalog_size = state.catalog.catalog().await.len();

    Json(json!({
        "status": "ok",
        "mode": state.config.runtime_mode,
        "catalog_size": catalog_size,
        "uptime_secs": state.server_started_at.elapsed().as_secs(),
    }))
}
