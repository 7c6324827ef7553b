//! Catalog sources.

use async_trait::async_trait;
use marquee_core::ContentItem;

use crate::errors::CatalogError;

pub mod builtin;
pub mod file;
#[cfg(test)]
pub mod mock;
pub mod remote;

pub use builtin::BuiltinCatalogSource;
pub use file::FileCatalogSource;
#[cfg(test)]
pub use mock::{FailingCatalogSource, StalledCatalogSource};
pub use remote::RemoteCatalogSource;

/// Trait for catalog backends.
///
/// Implementations provide the full, unfiltered content list through
/// different backends (built-in data, a JSON file, a remote endpoint, mock
/// sources for testing).
#[async_trait]
pub trait CatalogSource: Send + Sync + std::fmt::Debug {
    /// Fetch every content item, in display order.
    ///
    /// # Errors
    /// - `CatalogError::SourceUnavailable` - Backend unreachable
    /// - `CatalogError::ParseFailed` - Backend returned malformed data
    /// - `CatalogError::Io` - Local read failed
    async fn fetch_all(&self) -> Result<Vec<ContentItem>, CatalogError>;

    /// Short label used in logs.
    fn describe(&self) -> String;
}
