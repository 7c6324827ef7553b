//! Source fetching the catalog from an HTTP endpoint.

use async_trait::async_trait;
use marquee_core::ContentItem;
use url::Url;

use super::CatalogSource;
use crate::errors::CatalogError;

/// Fetches a JSON array of content items with `GET <url>`.
#[derive(Debug)]
pub struct RemoteCatalogSource {
    client: reqwest::Client,
    url: Url,
}

impl RemoteCatalogSource {
    /// Create a remote source for an `http` or `https` URL.
    ///
    /// # Errors
    /// - `CatalogError::InvalidSource` - URL is malformed or not HTTP(S)
    pub fn new(url: &str) -> Result<Self, CatalogError> {
        let parsed = Url::parse(url).map_err(|e| CatalogError::InvalidSource {
            location: url.to_string(),
            reason: e.to_string(),
        })?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(CatalogError::InvalidSource {
                location: url.to_string(),
                reason: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }

        Ok(Self {
            client: reqwest::Client::new(),
            url: parsed,
        })
    }

    /// Endpoint this source reads from.
    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl CatalogSource for RemoteCatalogSource {
    async fn fetch_all(&self) -> Result<Vec<ContentItem>, CatalogError> {
        let response = self
            .client
            .get(self.url.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| CatalogError::SourceUnavailable {
                reason: format!("Catalog request failed: {e}"),
            })?;

        if !response.status().is_success() {
            return Err(CatalogError::SourceUnavailable {
                reason: format!("Catalog endpoint returned HTTP {}", response.status()),
            });
        }

        response
            .json()
            .await
            .map_err(|e| CatalogError::ParseFailed {
                reason: format!("Catalog JSON parsing failed: {e}"),
            })
    }

    fn describe(&self) -> String {
        format!("remote {}", self.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_http_urls() {
        let source = RemoteCatalogSource::new("https://cdn.example.com/catalog.json").unwrap();
        assert_eq!(source.url().host_str(), Some("cdn.example.com"));
        assert!(source.describe().starts_with("remote https://"));
    }

    #[test]
    fn test_rejects_malformed_and_non_http_urls() {
        assert!(matches!(
            RemoteCatalogSource::new("not a url"),
            Err(CatalogError::InvalidSource { .. })
        ));
        assert!(matches!(
            RemoteCatalogSource::new("file:///srv/catalog.json"),
            Err(CatalogError::InvalidSource { .. })
        ));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_source_unavailable() {
        // Port 9 (discard) on loopback is not expected to serve HTTP.
        let source = RemoteCatalogSource::new("http://127.0.0.1:9/catalog.json").unwrap();
        assert!(matches!(
            source.fetch_all().await,
            Err(CatalogError::SourceUnavailable { .. })
        ));
    }
}
