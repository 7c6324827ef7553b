//! Marquee Web - JSON API Server

#![warn(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![warn(clippy::too_many_lines)]
//!
//! Serves the tier-gated catalog, browse rows, search and session endpoints
//! as JSON. Every catalog route resolves the viewer's tier from an explicit
//! `tier` parameter or a bearer token before filtering.

pub mod error;
pub mod handlers;
pub mod server;

// Re-export main types
pub use error::{ApiError, ServerError};
pub use server::{AppState, build_router, run_server};
