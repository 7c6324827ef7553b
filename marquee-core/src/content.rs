//! Catalog content records.

use serde::{Deserialize, Serialize};

use crate::tier::SubscriptionTier;

/// Presentation category of a catalog title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Movie")]
    Movie,
    #[serde(rename = "TV Show")]
    TvShow,
}

impl Category {
    /// Display and wire name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Movie => "Movie",
            Self::TvShow => "TV Show",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Movie" => Ok(Self::Movie),
            "TV Show" => Ok(Self::TvShow),
            _ => Err(format!(
                "Invalid category: '{s}'. Valid options are: Movie, TV Show"
            )),
        }
    }
}

/// A single title in the catalog.
///
/// Immutable once loaded. `genre` keeps the source order and may repeat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    pub category: Category,
    pub genre: Vec<String>,
    pub release_year: u16,
    /// Rating code such as `TV-MA` or `PG-13`
    pub rating: String,
    /// Free-form length such as `2h 18m` or `4 Seasons`
    pub duration: String,
    pub is_trending: bool,
    pub is_new_release: bool,
    /// Lowest tier allowed to watch this title
    pub subscription_tier: SubscriptionTier,
}

impl ContentItem {
    /// Whether `genre` lists exactly this value.
    pub fn has_genre(&self, genre: &str) -> bool {
        self.genre.iter().any(|g| g == genre)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ContentItem {
        ContentItem {
            id: "6".to_string(),
            title: "Don't Look Up".to_string(),
            description: "Two astronomers go on a media tour.".to_string(),
            image_url: "/images/dont-look-up.png".to_string(),
            video_url: None,
            category: Category::Movie,
            genre: vec!["Comedy".to_string(), "Satire".to_string()],
            release_year: 2021,
            rating: "R".to_string(),
            duration: "2h 18m".to_string(),
            is_trending: true,
            is_new_release: true,
            subscription_tier: SubscriptionTier::Standard,
        }
    }

    #[test]
    fn test_json_shape_matches_wire_format() {
        let value = serde_json::to_value(sample()).unwrap();

        assert_eq!(value["category"], "Movie");
        assert_eq!(value["subscription_tier"], "standard");
        assert_eq!(value["release_year"], 2021);
        assert!(value.get("video_url").is_none());
    }

    #[test]
    fn test_tv_show_category_name() {
        let json = serde_json::to_string(&Category::TvShow).unwrap();
        assert_eq!(json, "\"TV Show\"");
        assert_eq!("TV Show".parse::<Category>(), Ok(Category::TvShow));
        assert!("tv".parse::<Category>().is_err());
    }

    #[test]
    fn test_has_genre_is_exact() {
        let item = sample();
        assert!(item.has_genre("Comedy"));
        assert!(!item.has_genre("comedy"));
        assert!(!item.has_genre("Com"));
    }
}
