//! Viewer tier resolution for catalog requests

use axum::http::HeaderMap;
use axum::http::header::AUTHORIZATION;
use marquee_core::SubscriptionTier;
use marquee_core::session::resolve_tier;

use crate::server::AppState;

/// Bearer token from the `Authorization` header, if any.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    let token = token.trim();

    if scheme.eq_ignore_ascii_case("bearer") && !token.is_empty() {
        Some(token)
    } else {
        None
    }
}

/// Tier a request browses with.
///
/// An explicit `tier` parameter wins and is parsed leniently. Otherwise the
/// bearer token is resolved through the session provider, falling back to
/// the configured default tier.
pub async fn viewer_tier(
    state: &AppState,
    tier_param: Option<&str>,
    headers: &HeaderMap,
) -> SubscriptionTier {
    if let Some(raw) = tier_param.filter(|raw| !raw.trim().is_empty()) {
        return SubscriptionTier::parse_or_default(Some(raw));
    }

    resolve_tier(
        state.sessions.as_ref(),
        bearer_token(headers),
        state.config.access.default_tier,
    )
    .await
}
