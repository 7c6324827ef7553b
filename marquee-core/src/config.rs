//! Centralized configuration for Marquee.
//!
//! All tunable parameters and settings are defined here to avoid
//! hard-coded values scattered throughout the codebase.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

use crate::mode::RuntimeMode;
use crate::tier::SubscriptionTier;

/// Central configuration for all Marquee components.
///
/// Groups related configuration settings into logical sections.
/// Supports environment variable overrides for runtime customization.
#[derive(Debug, Clone, Default)]
pub struct MarqueeConfig {
    pub server: ServerConfig,
    pub catalog: CatalogConfig,
    pub access: AccessConfig,
    pub runtime_mode: RuntimeMode,
}

/// HTTP server binding configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address the JSON API binds to
    pub host: IpAddr,
    /// Port the JSON API listens on
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 3000,
        }
    }
}

impl ServerConfig {
    /// Socket address assembled from host and port.
    pub fn bind_address(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Catalog source selection and fetch limits.
///
/// In production mode a file path wins over a remote URL; with neither set
/// the built-in catalog is served.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Upper bound on a single catalog fetch before falling back
    pub fetch_timeout: Duration,
    /// JSON file holding the catalog array
    pub file_path: Option<PathBuf>,
    /// HTTP endpoint returning the catalog array
    pub remote_url: Option<String>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            fetch_timeout: Duration::from_secs(5),
            file_path: None,
            remote_url: None,
        }
    }
}

/// Access gating and search presentation settings.
#[derive(Debug, Clone)]
pub struct AccessConfig {
    /// Tier used when no session is available or the session lookup fails
    pub default_tier: SubscriptionTier,
    /// Maximum number of search suggestions returned
    pub suggestion_limit: usize,
    /// Queries shorter than this produce no suggestions
    pub suggestion_min_query_len: usize,
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self {
            default_tier: SubscriptionTier::Basic,
            suggestion_limit: 5,
            suggestion_min_query_len: 2,
        }
    }
}

/// Errors raised while reading configuration overrides.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value '{value}' for {key}: {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

impl MarqueeConfig {
    /// Creates configuration with environment variable overrides.
    ///
    /// # Errors
    ///
    /// - `ConfigError::InvalidValue` - A `MARQUEE_*` variable is set but malformed
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Creates configuration using an arbitrary variable lookup.
    ///
    /// Unset variables keep their defaults.
    ///
    /// # Errors
    ///
    /// - `ConfigError::InvalidValue` - A variable is set but malformed
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(host) = lookup("MARQUEE_HOST") {
            config.server.host = parse_value("MARQUEE_HOST", &host)?;
        }

        if let Some(port) = lookup("MARQUEE_PORT") {
            config.server.port = parse_value("MARQUEE_PORT", &port)?;
        }

        if let Some(mode) = lookup("MARQUEE_MODE") {
            config.runtime_mode = parse_value("MARQUEE_MODE", &mode)?;
        }

        if let Some(path) = lookup("MARQUEE_CATALOG_FILE") {
            config.catalog.file_path = Some(PathBuf::from(path));
        }

        if let Some(url) = lookup("MARQUEE_CATALOG_URL") {
            config.catalog.remote_url = Some(url);
        }

        if let Some(seconds) = lookup("MARQUEE_CATALOG_TIMEOUT_SECS") {
            let seconds: u64 = parse_value("MARQUEE_CATALOG_TIMEOUT_SECS", &seconds)?;
            config.catalog.fetch_timeout = Duration::from_secs(seconds);
        }

        if let Some(tier) = lookup("MARQUEE_DEFAULT_TIER") {
            config.access.default_tier = parse_value("MARQUEE_DEFAULT_TIER", &tier)?;
        }

        if let Some(limit) = lookup("MARQUEE_SUGGESTION_LIMIT") {
            config.access.suggestion_limit = parse_value("MARQUEE_SUGGESTION_LIMIT", &limit)?;
        }

        Ok(config)
    }

    /// Creates a configuration optimized for testing.
    ///
    /// Short fetch timeout so fallback paths resolve quickly.
    pub fn for_testing() -> Self {
        Self {
            catalog: CatalogConfig {
                fetch_timeout: Duration::from_millis(200),
                ..Default::default()
            },
            runtime_mode: RuntimeMode::Development,
            ..Default::default()
        }
    }
}

fn parse_value<T>(key: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidValue {
            key,
            value: raw.to_string(),
            reason: e.to_string(),
        })
}
