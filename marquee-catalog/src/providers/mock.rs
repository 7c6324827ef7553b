//! Misbehaving sources for exercising fallback paths.

use async_trait::async_trait;
use marquee_core::ContentItem;

use super::CatalogSource;
use crate::errors::CatalogError;

/// Source that always reports itself unreachable.
#[derive(Debug, Default)]
pub struct FailingCatalogSource;

#[async_trait]
impl CatalogSource for FailingCatalogSource {
    async fn fetch_all(&self) -> Result<Vec<ContentItem>, CatalogError> {
        Err(CatalogError::SourceUnavailable {
            reason: "mock outage".to_string(),
        })
    }

    fn describe(&self) -> String {
        "failing mock".to_string()
    }
}

/// Source that never answers.
#[derive(Debug, Default)]
pub struct StalledCatalogSource;

#[async_trait]
impl CatalogSource for StalledCatalogSource {
    async fn fetch_all(&self) -> Result<Vec<ContentItem>, CatalogError> {
        std::future::pending::<()>().await;
        Ok(Vec::new())
    }

    fn describe(&self) -> String {
        "stalled mock".to_string()
    }
}
