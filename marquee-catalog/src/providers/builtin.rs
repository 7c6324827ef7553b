//! Source serving the built-in catalog.

use async_trait::async_trait;
use marquee_core::ContentItem;

use super::CatalogSource;
use crate::errors::CatalogError;
use crate::store::builtin_catalog;

/// Serves the built-in twelve-title catalog; never fails.
#[derive(Debug, Default)]
pub struct BuiltinCatalogSource;

impl BuiltinCatalogSource {
    /// Creates the built-in source.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CatalogSource for BuiltinCatalogSource {
    async fn fetch_all(&self) -> Result<Vec<ContentItem>, CatalogError> {
        Ok(builtin_catalog())
    }

    fn describe(&self) -> String {
        "built-in catalog".to_string()
    }
}
