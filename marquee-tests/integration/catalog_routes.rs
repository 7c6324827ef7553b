//! Catalog routes: tier filtering, lookup, browse rows and search

use axum::http::StatusCode;

use crate::harness::{get, ids, search_uri, test_app};

#[tokio::test]
async fn test_content_is_filtered_by_tier_param() {
    let app = test_app();

    let (status, basic) = get(&app, "/content?tier=basic").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&basic), vec!["1", "4", "7", "10"]);

    let (_, standard) = get(&app, "/content?tier=standard").await;
    assert_eq!(
        ids(&standard),
        vec!["1", "2", "3", "4", "6", "7", "9", "10", "12"]
    );

    let (_, premium) = get(&app, "/content?tier=premium").await;
    assert_eq!(ids(&premium).len(), 12);
}

#[tokio::test]
async fn test_unknown_or_missing_tier_browses_as_basic() {
    let app = test_app();

    let (_, unknown) = get(&app, "/content?tier=platinum").await;
    assert_eq!(ids(&unknown), vec!["1", "4", "7", "10"]);

    let (_, missing) = get(&app, "/content").await;
    assert_eq!(ids(&missing), vec!["1", "4", "7", "10"]);

    let (_, uppercase) = get(&app, "/content?tier=PREMIUM").await;
    assert_eq!(ids(&uppercase).len(), 12);
}

#[tokio::test]
async fn test_content_lookup_status_codes() {
    let app = test_app();

    let (status, item) = get(&app, "/content/5?tier=premium").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(item["id"], "5");
    assert_eq!(item["subscription_tier"], "premium");

    let (status, body) = get(&app, "/content/5?tier=standard").await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert!(body["error"].as_str().unwrap().contains("premium"));

    let (status, body) = get(&app, "/content/999?tier=premium").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("999"));
}

#[tokio::test]
async fn test_browse_rows_for_basic() {
    let app = test_app();

    let (status, page) = get(&app, "/browse?tier=basic").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["featured"]["id"], "1");

    let sections = page["sections"].as_array().unwrap();
    let keys: Vec<&str> = sections
        .iter()
        .map(|section| section["key"].as_str().unwrap())
        .collect();
    assert_eq!(&keys[..4], &["trending", "new_releases", "tv_shows", "movies"]);
    assert!(keys[4..].iter().all(|key| key.starts_with("genre:")));

    for section in sections {
        let items = section["items"].as_array().unwrap();
        assert!(!items.is_empty());
        assert!(items.iter().all(|item| item["subscription_tier"] == "basic"));
    }
}

#[tokio::test]
async fn test_search_respects_tier() {
    let app = test_app();

    let (_, standard) = get(&app, &search_uri("dark", "&tier=standard")).await;
    assert_eq!(ids(&standard), vec!["3"]);

    let (_, premium) = get(&app, &search_uri("DARK", "&tier=premium")).await;
    assert_eq!(ids(&premium), vec!["3"]);

    let (_, basic) = get(&app, &search_uri("dark", "&tier=basic")).await;
    assert!(ids(&basic).is_empty());
}

#[tokio::test]
async fn test_blank_query_returns_empty_array() {
    let app = test_app();

    let (status, blank) = get(&app, &search_uri("   ", "&tier=premium")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(ids(&blank).is_empty());

    let (_, missing) = get(&app, "/search?tier=premium").await;
    assert!(ids(&missing).is_empty());
}

#[tokio::test]
async fn test_search_refinement_filters() {
    let app = test_app();

    let (_, movies) = get(
        &app,
        &search_uri("thriller", "&tier=premium&category=Movie"),
    )
    .await;
    assert_eq!(ids(&movies), vec!["7", "9"]);

    let (_, ignored) = get(
        &app,
        &search_uri("thriller", "&tier=premium&category=&genre=&year="),
    )
    .await;
    let (_, unfiltered) = get(&app, &search_uri("thriller", "&tier=premium")).await;
    assert_eq!(ids(&ignored), ids(&unfiltered));

    let (_, older) = get(&app, &search_uri("e", "&tier=premium&year=older")).await;
    for item in older.as_array().unwrap() {
        assert!(item["release_year"].as_u64().unwrap() < 2018);
    }
}

#[tokio::test]
async fn test_suggestions_need_two_characters() {
    let app = test_app();

    let (_, short) = get(&app, "/search/suggestions?q=d&tier=premium").await;
    assert!(ids(&short).is_empty());

    let (_, drama) = get(&app, "/search/suggestions?q=drama&tier=premium").await;
    assert_eq!(ids(&drama).len(), 5);
}

#[tokio::test]
async fn test_users_plans_and_health() {
    let app = test_app();

    let (_, users) = get(&app, "/users").await;
    let emails: Vec<&str> = users
        .as_array()
        .unwrap()
        .iter()
        .map(|user| user["email"].as_str().unwrap())
        .collect();
    assert_eq!(emails, vec!["test1@example.com", "premium@example.com"]);

    let (_, plans) = get(&app, "/plans").await;
    let prices: Vec<u64> = plans
        .as_array()
        .unwrap()
        .iter()
        .map(|plan| plan["monthly_price_cents"].as_u64().unwrap())
        .collect();
    assert_eq!(prices, vec![999, 1499, 1999]);

    let (status, health) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(health["status"], "ok");
    assert_eq!(health["mode"], "development");
    assert_eq!(health["catalog_size"], 12);
}
