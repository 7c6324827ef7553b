//! Test fixtures for catalog testing.
//!
//! Hand-built items for scenario tests and a proptest strategy producing
//! catalogs with unique ids for the ordering laws.

use marquee_core::{Category, ContentItem, SubscriptionTier};
use proptest::prelude::*;

const GENRE_POOL: &[&str] = &[
    "Drama", "Sci-Fi", "Crime", "Comedy", "Thriller", "Mystery", "Action",
];

const TITLE_POOL: &[&str] = &[
    "Dark Waters",
    "Stranger Tides",
    "The Long Night",
    "Red Horizon",
    "Ölümsüz",
    "Quiet Streets",
];

/// Builds a catalog item with sensible defaults for the fields tests ignore.
pub fn fixture_item(
    id: &str,
    title: &str,
    tier: SubscriptionTier,
    category: Category,
    genre: &[&str],
    release_year: u16,
) -> ContentItem {
    ContentItem {
        id: id.to_string(),
        title: title.to_string(),
        description: format!("Fixture description for {title}"),
        image_url: format!("/images/{id}.png"),
        video_url: None,
        category,
        genre: genre.iter().map(|g| g.to_string()).collect(),
        release_year,
        rating: "TV-14".to_string(),
        duration: "1h 30m".to_string(),
        is_trending: false,
        is_new_release: false,
        subscription_tier: tier,
    }
}

fn arb_item() -> impl Strategy<Value = ContentItem> {
    (
        0usize..3,
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        1990u16..2026,
        prop::sample::subsequence(GENRE_POOL.to_vec(), 0..4),
        prop::sample::select(TITLE_POOL.to_vec()),
    )
        .prop_map(
            |(tier_index, is_movie, is_trending, is_new_release, year, genre, title)| {
                let category = if is_movie {
                    Category::Movie
                } else {
                    Category::TvShow
                };
                let mut item = fixture_item(
                    "",
                    title,
                    SubscriptionTier::ALL[tier_index],
                    category,
                    &genre,
                    year,
                );
                item.is_trending = is_trending;
                item.is_new_release = is_new_release;
                item
            },
        )
}

/// Catalogs of up to 24 items with ids `"0"`, `"1"`, ... in order.
pub fn arb_catalog() -> impl Strategy<Value = Vec<ContentItem>> {
    prop::collection::vec(arb_item(), 0..24).prop_map(|items| {
        items
            .into_iter()
            .enumerate()
            .map(|(index, mut item)| {
                item.id = index.to_string();
                item
            })
            .collect()
    })
}
