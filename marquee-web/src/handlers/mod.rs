//! HTTP request handlers organized by functionality

pub mod api;
pub mod auth;
pub mod catalog;
pub mod extract;
pub mod viewer;

// Re-export handler functions
pub use api::{api_health, api_plans, api_users};
pub use auth::{SignInRequest, SignUpRequest, api_me, api_sign_in, api_sign_out, api_sign_up};
pub use catalog::{
    SearchQuery, TierQuery, api_browse, api_content, api_content_by_id, api_search,
    api_suggestions,
};
pub use extract::{ApiJson, ApiPath, ApiQuery};
pub use viewer::{bearer_token, viewer_tier};
