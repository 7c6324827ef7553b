//! Marquee Catalog - Tier-gated content access and search

#![deny(missing_docs)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![warn(clippy::too_many_lines)]
//!
//! Holds the built-in catalog and the pure filtering pipeline: access by
//! subscription tier, substring search, browse-page grouping and post-search
//! refinement. `CatalogService` ties these to a pluggable catalog source with
//! a fallback.

pub mod access;
pub mod errors;
pub mod filters;
pub mod providers;
pub mod search;
pub mod sections;
pub mod service;
pub mod store;

#[cfg(test)]
mod test_fixtures;

// Re-export main types
pub use access::{can_access, filter_by_tier};
pub use errors::CatalogError;
pub use filters::{ResultFilters, YearFilter, apply_filters, available_genres};
pub use search::{search, suggest};
pub use sections::{BrowsePage, Section, browse_page, featured, group_sections};
pub use service::{CatalogService, ContentLookup};

/// Convenience type alias for Results with CatalogError.
pub type Result<T> = std::result::Result<T, CatalogError>;
