//! Post-search refinement filters.
//!
//! The year filter keeps the site's historical "older" sentinel: it selects
//! titles released before 2018. Titles from 2018 onward are never "older".

use marquee_core::ContentItem;
use serde::{Deserialize, Serialize};

use crate::sections::distinct_genres;

/// Releases before this year count as "older".
pub const OLDER_CUTOFF_YEAR: u16 = 2018;

/// Sentinel year filter value selecting pre-cutoff releases.
pub const OLDER_SENTINEL: &str = "older";

/// Year filter mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum YearFilter {
    /// `release_year` rendered as a string equals this value
    Exact(String),
    /// `release_year < OLDER_CUTOFF_YEAR`
    Older,
}

impl YearFilter {
    /// Interpret a raw filter value.
    pub fn parse(raw: &str) -> Self {
        if raw == OLDER_SENTINEL {
            Self::Older
        } else {
            Self::Exact(raw.to_string())
        }
    }

    fn matches(&self, item: &ContentItem) -> bool {
        match self {
            Self::Older => item.release_year < OLDER_CUTOFF_YEAR,
            Self::Exact(year) => item.release_year.to_string() == *year,
        }
    }
}

/// Optional refinement filters. Unset or empty fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultFilters {
    /// Exact category name, `Movie` or `TV Show`
    #[serde(default)]
    pub category: Option<String>,
    /// Exact genre name
    #[serde(default)]
    pub genre: Option<String>,
    /// A year such as `2021`, or `older`
    #[serde(default)]
    pub year: Option<String>,
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

impl ResultFilters {
    /// Whether any filter is set.
    pub fn is_active(&self) -> bool {
        present(&self.category).is_some()
            || present(&self.genre).is_some()
            || present(&self.year).is_some()
    }

    /// Whether `item` passes every set filter.
    pub fn matches(&self, item: &ContentItem) -> bool {
        if let Some(category) = present(&self.category) {
            if item.category.as_str() != category {
                return false;
            }
        }

        if let Some(genre) = present(&self.genre) {
            if !item.has_genre(genre) {
                return false;
            }
        }

        match present(&self.year) {
            Some(year) => YearFilter::parse(year).matches(item),
            None => true,
        }
    }
}

/// Items passing all set filters, in input order.
pub fn apply_filters(results: &[ContentItem], filters: &ResultFilters) -> Vec<ContentItem> {
    results
        .iter()
        .filter(|item| filters.matches(item))
        .cloned()
        .collect()
}

/// Genres offered by the genre filter for a result set, in first-seen order.
pub fn available_genres(results: &[ContentItem]) -> Vec<String> {
    distinct_genres(results)
}
