//! Integration tests for Marquee
//!
//! Drive the assembled router in-process with `tower::ServiceExt::oneshot`,
//! covering tier resolution, catalog routes, the session flow and catalog
//! source fallback.

#[path = "integration/harness.rs"]
mod harness;

#[path = "integration/auth_flow.rs"]
mod auth_flow;
#[path = "integration/catalog_fallback.rs"]
mod catalog_fallback;
#[path = "integration/catalog_routes.rs"]
mod catalog_routes;
