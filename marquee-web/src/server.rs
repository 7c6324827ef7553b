//! JSON API server for the Marquee catalog
//!
//! Builds the shared state and router. Catalog, session and mock account
//! data are chosen from the runtime mode in `MarqueeConfig`.

use std::sync::Arc;
use std::time::Instant;

use axum::Router;
use axum::routing::{get, post};
use chrono::Utc;
use marquee_catalog::{CatalogError, CatalogService, store};
use marquee_core::{InMemorySessionProvider, MarqueeConfig, Plan, SessionProvider, UserAccount};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::error::ServerError;
use crate::handlers::{
    api_browse, api_content, api_content_by_id, api_health, api_me, api_plans, api_search,
    api_sign_in, api_sign_out, api_sign_up, api_suggestions, api_users,
};

/// State shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub catalog: CatalogService,
    pub sessions: Arc<dyn SessionProvider>,
    pub users: Arc<[UserAccount]>,
    pub plans: Arc<[Plan]>,
    pub config: Arc<MarqueeConfig>,
    pub server_started_at: Instant,
}

impl AppState {
    /// Builds state from configuration with the in-memory session provider.
    ///
    /// # Errors
    /// - `CatalogError::InvalidSource` - Configured catalog source is malformed
    pub fn new(config: MarqueeConfig) -> Result<Self, CatalogError> {
        let catalog =
            CatalogService::from_config(config.runtime_mode, &config.catalog, config.access.clone())?;
        let users = store::mock_users(Utc::now());
        let sessions = Arc::new(InMemorySessionProvider::with_users(users.clone()));

        Ok(Self::with_parts(config, catalog, sessions, users))
    }

    /// Builds state from explicit collaborators.
    pub fn with_parts(
        config: MarqueeConfig,
        catalog: CatalogService,
        sessions: Arc<dyn SessionProvider>,
        users: Vec<UserAccount>,
    ) -> Self {
        Self {
            catalog,
            sessions,
            users: users.into(),
            plans: store::plans().into(),
            config: Arc::new(config),
            server_started_at: Instant::now(),
        }
    }
}

/// Router with every API route, CORS and request tracing.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Catalog
        .route("/content", get(api_content))
        .route("/content/{id}", get(api_content_by_id))
        .route("/browse", get(api_browse))
        .route("/search", get(api_search))
        .route("/search/suggestions", get(api_suggestions))
        // Accounts
        .route("/auth/sign-in", post(api_sign_in))
        .route("/auth/sign-up", post(api_sign_up))
        .route("/auth/sign-out", post(api_sign_out))
        .route("/auth/me", get(api_me))
        .route("/users", get(api_users))
        .route("/plans", get(api_plans))
        .route("/health", get(api_health))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve the API until Ctrl-C.
///
/// # Errors
/// - `ServerError::Catalog` - Catalog source could not be configured
/// - `ServerError::Bind` - Listen address unavailable
/// - `ServerError::Io` - Server failed while running
pub async fn run_server(config: MarqueeConfig) -> Result<(), ServerError> {
    let address = config.server.bind_address();
    let mode = config.runtime_mode;
    let state = AppState::new(config)?;
    let titles = state.catalog.catalog().await.len();
    tracing::info!("Catalog ready with {titles} titles");
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(address)
        .await
        .map_err(|source| ServerError::Bind { address, source })?;

    tracing::info!("Marquee API running on http://{address} ({mode} mode)");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Marquee API stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
}
