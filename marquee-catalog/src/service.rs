//! Catalog service: source selection, fallback, and the query entry points.
//!
//! Wraps a `CatalogSource` with a fetch timeout and an injected fallback
//! catalog. The source is fetched once; the resulting snapshot, or the
//! fallback if the fetch failed, is served for the life of the service and
//! every clone of it.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use marquee_core::config::{AccessConfig, CatalogConfig};
use marquee_core::{ContentItem, RuntimeMode, SubscriptionTier};
use tokio::sync::OnceCell;

use crate::access::{can_access, filter_by_tier};
use crate::errors::CatalogError;
use crate::filters::{ResultFilters, apply_filters};
use crate::providers::{
    BuiltinCatalogSource, CatalogSource, FileCatalogSource, RemoteCatalogSource,
};
use crate::search::{search, suggest};
use crate::sections::{BrowsePage, browse_page};
use crate::store::builtin_catalog;

/// Outcome of a single-title lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentLookup {
    /// Title exists and the tier may watch it
    Available(ContentItem),
    /// Title exists but needs a higher tier
    Locked {
        /// Lowest tier that unlocks the title
        required: SubscriptionTier,
    },
    /// No title has this id
    NotFound,
}

/// Catalog access for the web and CLI layers.
#[derive(Debug, Clone)]
pub struct CatalogService {
    source: Arc<dyn CatalogSource>,
    fallback: Arc<[ContentItem]>,
    snapshot: Arc<OnceCell<Arc<[ContentItem]>>>,
    fetch_timeout: Duration,
    access: AccessConfig,
}

impl CatalogService {
    /// Creates a service over `source`, answering from `fallback` on failure.
    pub fn new(
        source: Arc<dyn CatalogSource>,
        fallback: Vec<ContentItem>,
        fetch_timeout: Duration,
        access: AccessConfig,
    ) -> Self {
        Self {
            source,
            fallback: fallback.into(),
            snapshot: Arc::new(OnceCell::new()),
            fetch_timeout,
            access,
        }
    }

    /// Creates a service serving only the built-in catalog.
    pub fn builtin(access: AccessConfig) -> Self {
        Self::new(
            Arc::new(BuiltinCatalogSource::new()),
            builtin_catalog(),
            CatalogConfig::default().fetch_timeout,
            access,
        )
    }

    /// Picks the catalog source for a runtime mode.
    ///
    /// Development always serves the built-in catalog. Production prefers the
    /// configured file, then the remote URL, then the built-in catalog. The
    /// built-in catalog is the fallback in every case.
    ///
    /// # Errors
    /// - `CatalogError::InvalidSource` - Configured remote URL is malformed
    pub fn from_config(
        mode: RuntimeMode,
        catalog: &CatalogConfig,
        access: AccessConfig,
    ) -> Result<Self, CatalogError> {
        let source: Arc<dyn CatalogSource> = match mode {
            RuntimeMode::Development => Arc::new(BuiltinCatalogSource::new()),
            RuntimeMode::Production => match (&catalog.file_path, &catalog.remote_url) {
                (Some(path), _) => Arc::new(FileCatalogSource::new(path.clone())),
                (None, Some(url)) => Arc::new(RemoteCatalogSource::new(url)?),
                (None, None) => Arc::new(BuiltinCatalogSource::new()),
            },
        };

        tracing::info!("Catalog source: {} ({mode} mode)", source.describe());
        Ok(Self::new(
            source,
            builtin_catalog(),
            catalog.fetch_timeout,
            access,
        ))
    }

    /// Access settings in effect.
    pub fn access(&self) -> &AccessConfig {
        &self.access
    }

    /// Fetch the full catalog from the source, bounded by the timeout.
    ///
    /// Always goes to the source; `catalog` is the cached entry point.
    ///
    /// # Errors
    /// - `CatalogError::Timeout` - Source did not answer in time
    /// - `CatalogError::DuplicateId` - Source returned a repeated id
    /// - Any error reported by the source itself
    pub async fn try_catalog(&self) -> Result<Vec<ContentItem>, CatalogError> {
        let items = tokio::time::timeout(self.fetch_timeout, self.source.fetch_all())
            .await
            .map_err(|_| CatalogError::Timeout {
                timeout_ms: self.fetch_timeout.as_millis(),
            })??;

        ensure_unique_ids(&items)?;
        Ok(items)
    }

    /// Full catalog, loaded on first use and immutable afterwards.
    ///
    /// A failed first load settles on the injected fallback for good.
    pub async fn catalog(&self) -> Arc<[ContentItem]> {
        let snapshot = self
            .snapshot
            .get_or_init(|| async {
                match self.try_catalog().await {
                    Ok(items) => {
                        tracing::info!(
                            "Loaded {} titles from {}",
                            items.len(),
                            self.source.describe()
                        );
                        items.into()
                    }
                    Err(e) => {
                        tracing::warn!(
                            "Catalog fetch from {} failed, serving fallback: {e}",
                            self.source.describe()
                        );
                        Arc::clone(&self.fallback)
                    }
                }
            })
            .await;
        Arc::clone(snapshot)
    }

    /// Catalog items visible to `tier`.
    pub async fn content_for_tier(&self, tier: SubscriptionTier) -> Vec<ContentItem> {
        filter_by_tier(&self.catalog().await, tier)
    }

    /// Search results for `query` visible to `tier`, refined by `filters`.
    pub async fn search(
        &self,
        query: &str,
        tier: SubscriptionTier,
        filters: &ResultFilters,
    ) -> Vec<ContentItem> {
        let results = search(&self.catalog().await, query, tier);
        if filters.is_active() {
            apply_filters(&results, filters)
        } else {
            results
        }
    }

    /// Type-ahead suggestions using the configured limit and minimum length.
    pub async fn suggestions(&self, query: &str, tier: SubscriptionTier) -> Vec<ContentItem> {
        suggest(
            &self.catalog().await,
            query,
            tier,
            self.access.suggestion_limit,
            self.access.suggestion_min_query_len,
        )
    }

    /// Browse page rows for `tier`.
    pub async fn browse(&self, tier: SubscriptionTier) -> BrowsePage {
        browse_page(&self.content_for_tier(tier).await)
    }

    /// Look up one title and check it against `tier`.
    pub async fn lookup(&self, id: &str, tier: SubscriptionTier) -> ContentLookup {
        let catalog = self.catalog().await;
        match catalog.iter().find(|item| item.id == id) {
            Some(item) if can_access(tier, item) => ContentLookup::Available(item.clone()),
            Some(item) => ContentLookup::Locked {
                required: item.subscription_tier,
            },
            None => ContentLookup::NotFound,
        }
    }
}

fn ensure_unique_ids(items: &[ContentItem]) -> Result<(), CatalogError> {
    let mut seen = HashSet::with_capacity(items.len());
    for item in items {
        if !seen.insert(item.id.as_str()) {
            return Err(CatalogError::DuplicateId {
                id: item.id.clone(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use marquee_core::Category;

    use super::*;
    use crate::providers::{FailingCatalogSource, StalledCatalogSource};
    use crate::test_fixtures::fixture_item;

    fn service_over(source: Arc<dyn CatalogSource>, timeout: Duration) -> CatalogService {
        CatalogService::new(source, builtin_catalog(), timeout, AccessConfig::default())
    }

    #[derive(Debug)]
    struct FixedSource(Vec<ContentItem>);

    #[async_trait::async_trait]
    impl CatalogSource for FixedSource {
        async fn fetch_all(&self) -> Result<Vec<ContentItem>, CatalogError> {
            Ok(self.0.clone())
        }

        fn describe(&self) -> String {
            "fixed".to_string()
        }
    }

    #[tokio::test]
    async fn test_failing_source_serves_fallback() {
        let service = service_over(Arc::new(FailingCatalogSource), Duration::from_secs(1));

        assert!(service.try_catalog().await.is_err());
        assert_eq!(service.catalog().await.to_vec(), builtin_catalog());
    }

    #[tokio::test]
    async fn test_stalled_source_times_out_to_fallback() {
        let service = service_over(Arc::new(StalledCatalogSource), Duration::from_millis(20));

        assert!(matches!(
            service.try_catalog().await,
            Err(CatalogError::Timeout { timeout_ms: 20 })
        ));
        assert_eq!(service.catalog().await.len(), 12);
    }

    #[tokio::test]
    async fn test_duplicate_ids_are_rejected() {
        let item = fixture_item("x", "Twice", SubscriptionTier::Basic, Category::Movie, &[], 2020);
        let service = service_over(
            Arc::new(FixedSource(vec![item.clone(), item])),
            Duration::from_secs(1),
        );

        assert!(matches!(
            service.try_catalog().await,
            Err(CatalogError::DuplicateId { .. })
        ));
        assert_eq!(service.catalog().await.len(), 12);
    }

    #[tokio::test]
    async fn test_healthy_source_is_served() {
        let item = fixture_item("x", "Solo", SubscriptionTier::Basic, Category::Movie, &[], 2020);
        let service = service_over(Arc::new(FixedSource(vec![item.clone()])), Duration::from_secs(1));

        assert_eq!(service.catalog().await.to_vec(), vec![item]);
    }

    #[derive(Debug)]
    struct CountingSource {
        items: Vec<ContentItem>,
        fetches: AtomicUsize,
    }

    #[async_trait::async_trait]
    impl CatalogSource for CountingSource {
        async fn fetch_all(&self) -> Result<Vec<ContentItem>, CatalogError> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            Ok(self.items.clone())
        }

        fn describe(&self) -> String {
            "counting".to_string()
        }
    }

    #[tokio::test]
    async fn test_source_is_fetched_once_across_queries() {
        let source = Arc::new(CountingSource {
            items: builtin_catalog(),
            fetches: AtomicUsize::new(0),
        });
        let service = service_over(source.clone(), Duration::from_secs(1));
        let copy = service.clone();

        service.content_for_tier(SubscriptionTier::Basic).await;
        service
            .search("dark", SubscriptionTier::Standard, &ResultFilters::default())
            .await;
        copy.suggestions("dr", SubscriptionTier::Premium).await;
        copy.lookup("3", SubscriptionTier::Premium).await;
        service.browse(SubscriptionTier::Standard).await;

        assert_eq!(source.fetches.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_stalled_source_costs_one_timeout() {
        let service = service_over(Arc::new(StalledCatalogSource), Duration::from_millis(50));
        service.catalog().await;

        let started = std::time::Instant::now();
        for _ in 0..5 {
            assert_eq!(service.catalog().await.len(), 12);
        }
        assert!(started.elapsed() < Duration::from_millis(50));
    }

    #[tokio::test]
    async fn test_search_applies_refinement_filters() {
        let service = CatalogService::builtin(AccessConfig::default());
        let filters = ResultFilters {
            category: Some("Movie".to_string()),
            ..Default::default()
        };

        let results = service.search("thriller", SubscriptionTier::Premium, &filters).await;
        let ids: Vec<&str> = results.iter().map(|item| item.id.as_str()).collect();
        assert_eq!(ids, vec!["7", "9"]);
    }

    #[tokio::test]
    async fn test_lookup_outcomes() {
        let service = CatalogService::builtin(AccessConfig::default());

        assert!(matches!(
            service.lookup("1", SubscriptionTier::Basic).await,
            ContentLookup::Available(item) if item.title == "Stranger Things"
        ));
        assert_eq!(
            service.lookup("5", SubscriptionTier::Standard).await,
            ContentLookup::Locked {
                required: SubscriptionTier::Premium
            }
        );
        assert_eq!(
            service.lookup("999", SubscriptionTier::Premium).await,
            ContentLookup::NotFound
        );
    }

    #[tokio::test]
    async fn test_suggestions_use_access_config() {
        let access = AccessConfig {
            suggestion_limit: 2,
            ..Default::default()
        };
        let service = CatalogService::builtin(access);

        assert_eq!(service.suggestions("drama", SubscriptionTier::Premium).await.len(), 2);
        assert!(service.suggestions("d", SubscriptionTier::Premium).await.is_empty());
    }

    #[tokio::test]
    async fn test_production_mode_reads_configured_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let only = vec![fixture_item(
            "solo",
            "File Only",
            SubscriptionTier::Basic,
            Category::Movie,
            &["Drama"],
            2015,
        )];
        file.write_all(serde_json::to_string(&only).unwrap().as_bytes())
            .unwrap();

        let config = CatalogConfig {
            file_path: Some(file.path().to_path_buf()),
            ..Default::default()
        };
        let service =
            CatalogService::from_config(RuntimeMode::Production, &config, AccessConfig::default())
                .unwrap();
        assert_eq!(service.content_for_tier(SubscriptionTier::Basic).await, only);

        let dev =
            CatalogService::from_config(RuntimeMode::Development, &config, AccessConfig::default())
                .unwrap();
        assert_eq!(dev.catalog().await.len(), 12);
    }

    #[test]
    fn test_invalid_remote_url_is_reported() {
        let config = CatalogConfig {
            remote_url: Some("ftp://catalog".to_string()),
            ..Default::default()
        };
        assert!(
            CatalogService::from_config(RuntimeMode::Production, &config, AccessConfig::default())
                .is_err()
        );
    }
}
