//! Source reading the catalog from a JSON file.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use marquee_core::ContentItem;

use super::CatalogSource;
use crate::errors::CatalogError;

/// Reads a JSON array of content items from disk on every fetch.
#[derive(Debug)]
pub struct FileCatalogSource {
    path: PathBuf,
}

impl FileCatalogSource {
    /// Creates a source for the catalog file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the catalog file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CatalogSource for FileCatalogSource {
    async fn fetch_all(&self) -> Result<Vec<ContentItem>, CatalogError> {
        let raw = tokio::fs::read_to_string(&self.path).await?;

        serde_json::from_str(&raw).map_err(|e| CatalogError::ParseFailed {
            reason: format!("{}: {e}", self.path.display()),
        })
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}
