//! Error types for catalog loading.

use thiserror::Error;

/// Errors that can occur while obtaining the catalog from a source.
///
/// None of these reach end users: `CatalogService` logs them and serves the
/// fallback catalog instead.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Catalog source could not be reached.
    #[error("Catalog source unavailable: {reason}")]
    SourceUnavailable {
        /// The reason the source was unavailable
        reason: String,
    },

    /// Catalog payload was not a valid content list.
    #[error("Failed to parse catalog: {reason}")]
    ParseFailed {
        /// The reason for the parse failure
        reason: String,
    },

    /// Catalog contained the same id more than once.
    #[error("Duplicate content id in catalog: {id}")]
    DuplicateId {
        /// The repeated id
        id: String,
    },

    /// Catalog fetch did not finish in time.
    #[error("Catalog fetch timed out after {timeout_ms}ms")]
    Timeout {
        /// Configured timeout in milliseconds
        timeout_ms: u128,
    },

    /// Catalog source location is malformed.
    #[error("Invalid catalog source '{location}': {reason}")]
    InvalidSource {
        /// The rejected path or URL
        location: String,
        /// Why it was rejected
        reason: String,
    },

    /// Reading a catalog file failed.
    #[error("Catalog I/O error: {0}")]
    Io(#[from] std::io::Error),
}
