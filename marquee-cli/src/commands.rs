//! CLI command implementations

use std::net::IpAddr;
use std::path::PathBuf;

use anyhow::Context;
use clap::Subcommand;
use marquee_catalog::{CatalogService, ResultFilters, store};
use marquee_core::{MarqueeConfig, RuntimeMode, SubscriptionTier};
use url::Url;

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Start the JSON API server
    Server {
        /// Host to bind to
        #[arg(long)]
        host: Option<IpAddr>,

        /// Port to bind to
        #[arg(short, long)]
        port: Option<u16>,

        /// Runtime mode (production or development)
        #[arg(long)]
        mode: Option<RuntimeMode>,

        /// JSON catalog file served in production mode
        #[arg(long)]
        catalog_file: Option<PathBuf>,

        /// HTTP endpoint returning the catalog, used when no file is set
        #[arg(long)]
        catalog_url: Option<Url>,
    },

    /// Print the browse page rows for a tier
    Browse {
        /// Subscription tier (basic, standard or premium)
        #[arg(short, long)]
        tier: Option<String>,
    },

    /// Search the catalog
    Search {
        /// Text matched against titles, descriptions and genres
        query: String,

        /// Subscription tier (basic, standard or premium)
        #[arg(short, long)]
        tier: Option<String>,

        /// Only this category (Movie or "TV Show")
        #[arg(long)]
        category: Option<String>,

        /// Only this genre
        #[arg(long)]
        genre: Option<String>,

        /// Only this release year, or "older" for titles before 2018
        #[arg(long)]
        year: Option<String>,
    },

    /// List subscription plans
    Plans,
}

/// Handle the CLI command
///
/// # Errors
/// - Configuration overrides in the environment are invalid
/// - The catalog source or server fails to start
pub async fn handle_command(command: Commands) -> anyhow::Result<()> {
    let config = MarqueeConfig::from_env().context("Failed to read MARQUEE_* settings")?;

    match command {
        Commands::Server {
            host,
            port,
            mode,
            catalog_file,
            catalog_url,
        } => {
            let mut config = config;
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            if let Some(mode) = mode {
                config.runtime_mode = mode;
            }
            if catalog_file.is_some() {
                config.catalog.file_path = catalog_file;
            }
            if let Some(url) = catalog_url {
                config.catalog.remote_url = Some(url.to_string());
            }
            start_server(config).await
        }
        Commands::Browse { tier } => browse(&config, tier.as_deref()).await,
        Commands::Search {
            query,
            tier,
            category,
            genre,
            year,
        } => {
            let filters = ResultFilters {
                category,
                genre,
                year,
            };
            search(&config, &query, tier.as_deref(), &filters).await
        }
        Commands::Plans => {
            list_plans();
            Ok(())
        }
    }
}

fn requested_tier(config: &MarqueeConfig, tier: Option<&str>) -> SubscriptionTier {
    match tier {
        Some(raw) => SubscriptionTier::parse_or_default(Some(raw)),
        None => config.access.default_tier,
    }
}

fn catalog_service(config: &MarqueeConfig) -> anyhow::Result<CatalogService> {
    CatalogService::from_config(config.runtime_mode, &config.catalog, config.access.clone())
        .context("Failed to configure catalog source")
}

/// Run the API server until Ctrl-C
async fn start_server(config: MarqueeConfig) -> anyhow::Result<()> {
    tracing::info!(
        "Starting Marquee server on {} in {} mode",
        config.server.bind_address(),
        config.runtime_mode
    );
    marquee_web::run_server(config).await?;
    Ok(())
}

/// Print browse rows as JSON
async fn browse(config: &MarqueeConfig, tier: Option<&str>) -> anyhow::Result<()> {
    let tier = requested_tier(config, tier);
    let page = catalog_service(config)?.browse(tier).await;

    println!("{}", serde_json::to_string_pretty(&page)?);
    Ok(())
}

/// Print search results as JSON
async fn search(
    config: &MarqueeConfig,
    query: &str,
    tier: Option<&str>,
    filters: &ResultFilters,
) -> anyhow::Result<()> {
    let tier = requested_tier(config, tier);
    let results = catalog_service(config)?.search(query, tier, filters).await;

    tracing::debug!("{} results for '{query}' at {tier}", results.len());
    println!("{}", serde_json::to_string_pretty(&results)?);
    Ok(())
}

fn list_plans() {
    for plan in store::plans() {
        println!("{:<10} {}", plan.name, plan.format_price());
        for feature in &plan.features {
            println!("  - {feature}");
        }
    }
}
