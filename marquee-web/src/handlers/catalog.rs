//! Catalog handlers: listing, lookup, browse rows and search

use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::Json;
use marquee_catalog::{BrowsePage, ContentLookup, ResultFilters};
use marquee_core::ContentItem;
use serde::Deserialize;

use super::extract::{ApiPath, ApiQuery};
use super::viewer::viewer_tier;
use crate::error::ApiError;
use crate::server::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct TierQuery {
    pub tier: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
    pub tier: Option<String>,
    pub category: Option<String>,
    pub genre: Option<String>,
    pub year: Option<String>,
}

impl SearchQuery {
    fn filters(&self) -> ResultFilters {
        ResultFilters {
            category: self.category.clone(),
            genre: self.genre.clone(),
            year: self.year.clone(),
        }
    }
}

pub async fn api_content(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<TierQuery>,
    headers: HeaderMap,
) -> Json<Vec<ContentItem>> {
    let tier = viewer_tier(&state, params.tier.as_deref(), &headers).await;
    Json(state.catalog.content_for_tier(tier).await)
}

pub async fn api_content_by_id(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<String>,
    ApiQuery(params): ApiQuery<TierQuery>,
    headers: HeaderMap,
) -> Result<Json<ContentItem>, ApiError> {
    let tier = viewer_tier(&state, params.tier.as_deref(), &headers).await;

    match state.catalog.lookup(&id, tier).await {
        ContentLookup::Available(item) => Ok(Json(item)),
        ContentLookup::Locked { required } => {
            tracing::debug!("Title {id} needs {required}, viewer has {tier}");
            Err(ApiError::UpgradeRequired { required })
        }
        ContentLookup::NotFound => Err(ApiError::ContentNotFound { id }),
    }
}

pub async fn api_browse(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<TierQuery>,
    headers: HeaderMap,
) -> Json<BrowsePage> {
    let tier = viewer_tier(&state, params.tier.as_deref(), &headers).await;
    Json(state.catalog.browse(tier).await)
}

pub async fn api_search(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<SearchQuery>,
    headers: HeaderMap,
) -> Json<Vec<ContentItem>> {
    let tier = viewer_tier(&state, params.tier.as_deref(), &headers).await;
    Json(state.catalog.search(&params.q, tier, &params.filters()).await)
}

pub async fn api_suggestions(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<SearchQuery>,
    headers: HeaderMap,
) -> Json<Vec<ContentItem>> {
    let tier = viewer_tier(&state, params.tier.as_deref(), &headers).await;
    Json(state.catalog.suggestions(&params.q, tier).await)
}
