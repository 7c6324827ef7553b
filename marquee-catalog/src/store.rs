//! Built-in catalog, seeded accounts and plan list.
//!
//! Served directly in development mode and used as the fallback whenever the
//! configured catalog source fails.

use chrono::{DateTime, Utc};
use marquee_core::{
    Category, ContentItem, Plan, SubscriptionStatus, SubscriptionTier, UserAccount,
};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[allow(clippy::too_many_arguments)]
fn title(
    id: &str,
    title: &str,
    description: &str,
    slug: &str,
    trailer: &str,
    category: Category,
    genre: &[&str],
    release_year: u16,
    rating: &str,
    duration: &str,
    (is_trending, is_new_release): (bool, bool),
    subscription_tier: SubscriptionTier,
) -> ContentItem {
    ContentItem {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        image_url: format!("/images/{slug}.png"),
        video_url: Some(format!("https://www.youtube.com/embed/{trailer}")),
        category,
        genre: strings(genre),
        release_year,
        rating: rating.to_string(),
        duration: duration.to_string(),
        is_trending,
        is_new_release,
        subscription_tier,
    }
}

/// The built-in twelve-title catalog, in display order.
pub fn builtin_catalog() -> Vec<ContentItem> {
    use Category::{Movie, TvShow};
    use SubscriptionTier::{Basic, Premium, Standard};

    vec![
        title(
            "1",
            "Stranger Things",
            "When a young boy vanishes, a small town uncovers a mystery involving secret experiments, terrifying supernatural forces and one strange little girl.",
            "stranger-things",
            "b9EkMc79ZSU",
            TvShow,
            &["Sci-Fi", "Horror", "Drama"],
            2016,
            "TV-14",
            "4 Seasons",
            (true, false),
            Basic,
        ),
        title(
            "2",
            "The Crown",
            "This drama follows the political rivalries and romance of Queen Elizabeth II's reign and the events that shaped the second half of the 20th century.",
            "the-crown",
            "JWtnJjn6ng0",
            TvShow,
            &["Drama", "Historical", "Biography"],
            2016,
            "TV-MA",
            "5 Seasons",
            (false, true),
            Standard,
        ),
        title(
            "3",
            "Dark",
            "A missing child sets four families on a frantic hunt for answers as they unearth a mind-bending mystery that spans three generations.",
            "dark",
            "rrwycJ08PSA",
            TvShow,
            &["Sci-Fi", "Thriller", "Mystery"],
            2017,
            "TV-MA",
            "3 Seasons",
            (true, false),
            Standard,
        ),
        title(
            "4",
            "1899",
            "Immigrants on a steamship traveling from London to New York get caught up in a mysterious riddle after finding a second vessel adrift on the open sea.",
            "1899",
            "ulOOON_KYHs",
            TvShow,
            &["Mystery", "Drama", "Horror"],
            2022,
            "TV-MA",
            "1 Season",
            (true, true),
            Basic,
        ),
        title(
            "5",
            "Breaking Bad",
            "A high school chemistry teacher diagnosed with inoperable lung cancer turns to manufacturing and selling methamphetamine to secure his family's future.",
            "breaking-bad",
            "HhesaQXLuRY",
            TvShow,
            &["Crime", "Drama", "Thriller"],
            2008,
            "TV-MA",
            "5 Seasons",
            (false, false),
            Premium,
        ),
        title(
            "6",
            "Don't Look Up",
            "Two astronomers go on a media tour to warn humankind of a planet-killing comet hurtling toward Earth. The response from a distracted world: Meh.",
            "dont-look-up",
            "RbIxYm3mKzI",
            Movie,
            &["Comedy", "Disaster", "Satire"],
            2021,
            "R",
            "2h 18m",
            (true, true),
            Standard,
        ),
        title(
            "7",
            "Red Notice",
            "An FBI profiler pursuing the world's most wanted art thief becomes his reluctant partner in crime to catch an elusive crook who's always one step ahead.",
            "red-notice",
            "T6l3mM7AWew",
            Movie,
            &["Action", "Comedy", "Thriller"],
            2021,
            "PG-13",
            "1h 58m",
            (true, true),
            Basic,
        ),
        title(
            "8",
            "The Queen's Gambit",
            "In a 1950s orphanage, a young girl reveals an astonishing talent for chess and begins an unlikely journey to stardom while grappling with addiction.",
            "queens-gambit",
            "CDrieqwSdgI",
            TvShow,
            &["Drama", "Historical"],
            2020,
            "TV-MA",
            "Limited Series",
            (false, false),
            Premium,
        ),
        title(
            "9",
            "Extraction",
            "A hardened mercenary's mission becomes a soul-searching race to survive when he's sent into Bangladesh to rescue a drug lord's kidnapped son.",
            "extraction",
            "L6P3nI6VnlY",
            Movie,
            &["Action", "Thriller"],
            2020,
            "R",
            "1h 56m",
            (false, false),
            Standard,
        ),
        title(
            "10",
            "Money Heist",
            "Eight thieves take hostages and lock themselves in the Royal Mint of Spain as a criminal mastermind manipulates the police to carry out his plan.",
            "money-heist",
            "_InqQJRqGW4",
            TvShow,
            &["Crime", "Drama", "Thriller"],
            2017,
            "TV-MA",
            "5 Seasons",
            (true, false),
            Basic,
        ),
        title(
            "11",
            "Ozark",
            "A financial adviser drags his family from Chicago to the Missouri Ozarks, where he must launder $500 million in five years to appease a drug boss.",
            "ozark",
            "5hAXVqrljbs",
            TvShow,
            &["Crime", "Drama", "Thriller"],
            2017,
            "TV-MA",
            "4 Seasons",
            (false, true),
            Premium,
        ),
        title(
            "12",
            "The Adam Project",
            "After accidentally crash-landing in 2022, time-traveling fighter pilot Adam Reed teams up with his 12-year-old self on a mission to save the future.",
            "adam-project",
            "IE8HIsIrq4o",
            Movie,
            &["Sci-Fi", "Action", "Adventure"],
            2022,
            "PG-13",
            "1h 46m",
            (true, true),
            Standard,
        ),
    ]
}

/// Accounts available for sign-in when no external auth service is configured.
///
/// Every account shares the supplied `created_at`.
pub fn mock_users(created_at: DateTime<Utc>) -> Vec<UserAccount> {
    vec![
        UserAccount {
            id: "1".to_string(),
            email: "test1@example.com".to_string(),
            full_name: "Test User".to_string(),
            avatar_url: None,
            subscription_tier: SubscriptionTier::Basic,
            subscription_status: SubscriptionStatus::Active,
            created_at,
        },
        UserAccount {
            id: "2".to_string(),
            email: "premium@example.com".to_string(),
            full_name: "Premium User".to_string(),
            avatar_url: None,
            subscription_tier: SubscriptionTier::Premium,
            subscription_status: SubscriptionStatus::Active,
            created_at,
        },
    ]
}

/// Subscription plans, cheapest first.
pub fn plans() -> Vec<Plan> {
    vec![
        Plan {
            tier: SubscriptionTier::Basic,
            name: "Basic".to_string(),
            monthly_price_cents: 999,
            features: strings(&["Watch on 1 device", "HD available", "Basic titles"]),
        },
        Plan {
            tier: SubscriptionTier::Standard,
            name: "Standard".to_string(),
            monthly_price_cents: 1499,
            features: strings(&[
                "Watch on 2 devices",
                "Full HD available",
                "Basic and standard titles",
            ]),
        },
        Plan {
            tier: SubscriptionTier::Premium,
            name: "Premium".to_string(),
            monthly_price_cents: 1999,
            features: strings(&[
                "Watch on 4 devices",
                "Ultra HD available",
                "The entire catalog",
            ]),
        },
    ]
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_builtin_ids_are_unique() {
        let catalog = builtin_catalog();
        let ids: HashSet<&str> = catalog.iter().map(|item| item.id.as_str()).collect();

        assert_eq!(catalog.len(), 12);
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn test_builtin_covers_every_tier() {
        let catalog = builtin_catalog();
        for tier in SubscriptionTier::ALL {
            assert!(catalog.iter().any(|item| item.subscription_tier == tier));
        }
    }

    #[test]
    fn test_known_fixtures() {
        let catalog = builtin_catalog();

        let breaking_bad = catalog.iter().find(|item| item.id == "5").unwrap();
        assert_eq!(breaking_bad.title, "Breaking Bad");
        assert_eq!(breaking_bad.subscription_tier, SubscriptionTier::Premium);

        let dark = catalog.iter().find(|item| item.id == "3").unwrap();
        assert_eq!(dark.title, "Dark");
        assert_eq!(dark.subscription_tier, SubscriptionTier::Standard);
        assert_eq!(dark.release_year, 2017);
    }

    #[test]
    fn test_plans_are_priced_by_tier() {
        let plans = plans();
        let tiers: Vec<SubscriptionTier> = plans.iter().map(|p| p.tier).collect();

        assert_eq!(tiers, SubscriptionTier::ALL.to_vec());
        assert!(
            plans
                .windows(2)
                .all(|pair| pair[0].monthly_price_cents < pair[1].monthly_price_cents)
        );
    }

    #[test]
    fn test_mock_users_cover_lowest_and_highest_tier() {
        let users = mock_users(Utc::now());
        assert_eq!(users[0].effective_tier(), SubscriptionTier::Basic);
        assert_eq!(users[1].effective_tier(), SubscriptionTier::Premium);
    }
}
