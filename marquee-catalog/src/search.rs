//! Free-text search over tier-visible content.

use marquee_core::{ContentItem, SubscriptionTier};

use crate::access::can_access;

/// Whether `item` mentions the already-lowercased `needle` in its title,
/// description or any genre.
fn matches_query(item: &ContentItem, needle: &str) -> bool {
    item.title.to_lowercase().contains(needle)
        || item.description.to_lowercase().contains(needle)
        || item
            .genre
            .iter()
            .any(|genre| genre.to_lowercase().contains(needle))
}

/// Items visible to `tier` whose title, description or genres contain `query`.
///
/// Matching is a case-insensitive substring test on the query as given, so
/// surrounding whitespace takes part in the match. A blank query returns no
/// results. Output keeps catalog order.
pub fn search(items: &[ContentItem], query: &str, tier: SubscriptionTier) -> Vec<ContentItem> {
    if query.trim().is_empty() {
        return Vec::new();
    }

    let needle = query.to_lowercase();
    let results: Vec<ContentItem> = items
        .iter()
        .filter(|item| can_access(tier, item))
        .filter(|item| matches_query(item, &needle))
        .cloned()
        .collect();

    tracing::debug!("Search '{}' as {} matched {} titles", query, tier, results.len());
    results
}

/// Type-ahead suggestions: the first `limit` search results.
///
/// Queries shorter than `min_query_len` characters (after trimming) suggest nothing.
pub fn suggest(
    items: &[ContentItem],
    query: &str,
    tier: SubscriptionTier,
    limit: usize,
    min_query_len: usize,
) -> Vec<ContentItem> {
    if query.trim().chars().count() < min_query_len {
        return Vec::new();
    }

    let mut results = search(items, query, tier);
    results.truncate(limit);
    results
}
