//! Browse-page rows built from an access-filtered list.
//!
//! Rows overlap freely: a trending drama movie lands in "Trending Now",
//! "Movies" and "Dramas" at once. Empty rows are dropped.

use marquee_core::{Category, ContentItem};
use serde::{Deserialize, Serialize};

/// Display titles for genres whose row name differs from the genre itself.
const GENRE_ROW_TITLES: &[(&str, &str)] = &[
    ("Drama", "Dramas"),
    ("Sci-Fi", "Sci-Fi & Fantasy"),
    ("Crime", "Crime TV Shows"),
];

/// A named row of titles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Stable identifier, e.g. `trending` or `genre:Drama`
    pub key: String,
    /// Human-readable row heading
    pub title: String,
    /// Members in catalog order
    pub items: Vec<ContentItem>,
}

/// The browse page: a hero title plus its rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowsePage {
    /// Hero title, absent only when nothing is visible
    pub featured: Option<ContentItem>,
    /// Non-empty rows in display order
    pub sections: Vec<Section>,
}

/// Row heading for a genre.
pub fn genre_row_title(genre: &str) -> String {
    GENRE_ROW_TITLES
        .iter()
        .find(|(name, _)| *name == genre)
        .map(|(_, title)| title.to_string())
        .unwrap_or_else(|| genre.to_string())
}

/// Distinct genres in first-seen order.
pub fn distinct_genres(items: &[ContentItem]) -> Vec<String> {
    let mut genres: Vec<String> = Vec::new();
    for genre in items.iter().flat_map(|item| item.genre.iter()) {
        if !genres.contains(genre) {
            genres.push(genre.clone());
        }
    }
    genres
}

fn section<P>(key: String, title: String, items: &[ContentItem], predicate: P) -> Option<Section>
where
    P: Fn(&ContentItem) -> bool,
{
    let members: Vec<ContentItem> = items.iter().filter(|item| predicate(*item)).cloned().collect();
    if members.is_empty() {
        None
    } else {
        Some(Section {
            key,
            title,
            items: members,
        })
    }
}

/// Group `items` into rows.
///
/// Fixed rows come first (trending, new releases, TV shows, movies), then one
/// row per genre in first-seen order. Callers pass an already tier-filtered list.
pub fn group_sections(items: &[ContentItem]) -> Vec<Section> {
    let fixed = [
        section("trending".into(), "Trending Now".into(), items, |item| {
            item.is_trending
        }),
        section("new_releases".into(), "New Releases".into(), items, |item| {
            item.is_new_release
        }),
        section("tv_shows".into(), "TV Shows".into(), items, |item| {
            item.category == Category::TvShow
        }),
        section("movies".into(), "Movies".into(), items, |item| {
            item.category == Category::Movie
        }),
    ];

    let genre_rows = distinct_genres(items).into_iter().filter_map(|genre| {
        section(
            format!("genre:{genre}"),
            genre_row_title(&genre),
            items,
            |item| item.has_genre(&genre),
        )
    });

    fixed.into_iter().flatten().chain(genre_rows).collect()
}

/// Hero title for the browse page: the first trending item, else the first item.
pub fn featured(items: &[ContentItem]) -> Option<ContentItem> {
    items
        .iter()
        .find(|item| item.is_trending)
        .or_else(|| items.first())
        .cloned()
}

/// Assemble the browse page for an already tier-filtered list.
pub fn browse_page(items: &[ContentItem]) -> BrowsePage {
    BrowsePage {
        featured: featured(items),
        sections: group_sections(items),
    }
}
