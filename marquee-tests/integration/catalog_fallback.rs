//! Catalog source selection and fallback in production mode

use std::io::Write;

use axum::http::StatusCode;
use marquee_core::{MarqueeConfig, RuntimeMode};
use serde_json::json;

use crate::harness::{app_with_config, get, ids};

fn production_config() -> MarqueeConfig {
    let mut config = MarqueeConfig::for_testing();
    config.runtime_mode = RuntimeMode::Production;
    config
}

#[tokio::test]
async fn test_missing_catalog_file_serves_builtin_catalog() {
    let mut config = production_config();
    config.catalog.file_path = Some("/nonexistent/marquee/catalog.json".into());
    let app = app_with_config(config);

    let (status, content) = get(&app, "/content?tier=premium").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&content).len(), 12);

    let (_, health) = get(&app, "/health").await;
    assert_eq!(health["mode"], "production");
    assert_eq!(health["catalog_size"], 12);
}

#[tokio::test]
async fn test_catalog_file_is_served_and_gated() {
    let catalog = json!([
        {
            "id": "a1",
            "title": "Open Water",
            "description": "A swimmer races the tide.",
            "image_url": "/images/open-water.png",
            "category": "Movie",
            "genre": ["Drama"],
            "release_year": 2016,
            "rating": "PG-13",
            "duration": "1h 40m",
            "is_trending": false,
            "is_new_release": false,
            "subscription_tier": "basic"
        },
        {
            "id": "a2",
            "title": "Closed Doors",
            "description": "A locked-room mystery.",
            "image_url": "/images/closed-doors.png",
            "category": "TV Show",
            "genre": ["Mystery"],
            "release_year": 2022,
            "rating": "TV-MA",
            "duration": "1 Season",
            "is_trending": true,
            "is_new_release": true,
            "subscription_tier": "premium"
        }
    ]);
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(catalog.to_string().as_bytes()).unwrap();

    let mut config = production_config();
    config.catalog.file_path = Some(file.path().to_path_buf());
    let app = app_with_config(config);

    let (_, basic) = get(&app, "/content?tier=basic").await;
    assert_eq!(ids(&basic), vec!["a1"]);

    let (_, premium) = get(&app, "/content?tier=premium").await;
    assert_eq!(ids(&premium), vec!["a1", "a2"]);

    let (status, _) = get(&app, "/content/a2?tier=standard").await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_unreachable_remote_catalog_serves_builtin_catalog() {
    let mut config = production_config();
    config.catalog.remote_url = Some("http://127.0.0.1:9/catalog.json".to_string());
    let app = app_with_config(config);

    let (status, content) = get(&app, "/content?tier=basic").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&content), vec!["1", "4", "7", "10"]);
}

fn catalog_entry(id: &str, title: &str, tier: &str) -> serde_json::Value {
    json!({
        "id": id,
        "title": title,
        "description": "Filed for search tests.",
        "image_url": format!("/images/{id}.png"),
        "category": "Movie",
        "genre": ["Thriller"],
        "release_year": 2021,
        "rating": "R",
        "duration": "2h",
        "is_trending": false,
        "is_new_release": false,
        "subscription_tier": tier
    })
}

fn app_over_file(file: &tempfile::NamedTempFile) -> axum::Router {
    let mut config = production_config();
    config.catalog.file_path = Some(file.path().to_path_buf());
    app_with_config(config)
}

#[tokio::test]
async fn test_premium_title_match_is_hidden_from_standard_search() {
    let catalog = json!([
        catalog_entry("s1", "Dark Harbor", "standard"),
        catalog_entry("p1", "Dark Money", "premium"),
    ]);
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(catalog.to_string().as_bytes()).unwrap();
    let app = app_over_file(&file);

    let (_, standard) = get(&app, "/search?q=dark&tier=standard").await;
    assert_eq!(ids(&standard), vec!["s1"]);

    let (_, premium) = get(&app, "/search?q=dark&tier=premium").await;
    assert_eq!(ids(&premium), vec!["s1", "p1"]);
}

#[tokio::test]
async fn test_catalog_is_loaded_once_per_process() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(json!([catalog_entry("v1", "First Cut", "basic")]).to_string().as_bytes())
        .unwrap();
    let app = app_over_file(&file);

    let (_, before) = get(&app, "/content?tier=basic").await;
    assert_eq!(ids(&before), vec!["v1"]);

    std::fs::write(
        file.path(),
        json!([catalog_entry("v2", "Second Cut", "basic")]).to_string(),
    )
    .unwrap();

    let (_, after) = get(&app, "/content?tier=basic").await;
    assert_eq!(ids(&after), vec!["v1"]);
}
