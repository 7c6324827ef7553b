//! Tier-gated access to catalog content.

use marquee_core::{ContentItem, SubscriptionTier};

/// Whether a viewer on `tier` may see `item`.
pub fn can_access(tier: SubscriptionTier, item: &ContentItem) -> bool {
    tier.unlocks(item.subscription_tier)
}

/// Items visible to `tier`, in catalog order.
pub fn filter_by_tier(items: &[ContentItem], tier: SubscriptionTier) -> Vec<ContentItem> {
    let visible: Vec<ContentItem> = items
        .iter()
        .filter(|item| can_access(tier, item))
        .cloned()
        .collect();

    tracing::debug!(
        "Tier {} sees {} of {} titles",
        tier,
        visible.len(),
        items.len()
    );
    visible
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use proptest::prelude::*;

    use super::*;
    use crate::store::builtin_catalog;
    use crate::test_fixtures::arb_catalog;

    fn ids(items: &[ContentItem]) -> Vec<&str> {
        items.iter().map(|item| item.id.as_str()).collect()
    }

    #[test]
    fn test_breaking_bad_needs_premium() {
        let catalog = builtin_catalog();

        let basic = filter_by_tier(&catalog, SubscriptionTier::Basic);
        assert!(!ids(&basic).contains(&"5"));

        let premium = filter_by_tier(&catalog, SubscriptionTier::Premium);
        assert!(ids(&premium).contains(&"5"));
    }

    #[test]
    fn test_builtin_visibility_per_tier() {
        let catalog = builtin_catalog();

        assert_eq!(
            ids(&filter_by_tier(&catalog, SubscriptionTier::Basic)),
            vec!["1", "4", "7", "10"]
        );
        assert_eq!(
            ids(&filter_by_tier(&catalog, SubscriptionTier::Standard)),
            vec!["1", "2", "3", "4", "6", "7", "9", "10", "12"]
        );
        assert_eq!(filter_by_tier(&catalog, SubscriptionTier::Premium), catalog);
    }

    #[test]
    fn test_empty_catalog_yields_empty_result() {
        for tier in SubscriptionTier::ALL {
            assert!(filter_by_tier(&[], tier).is_empty());
        }
    }

    proptest! {
        #[test]
        fn prop_every_visible_item_is_within_tier(catalog in arb_catalog(), tier_index in 0usize..3) {
            let tier = SubscriptionTier::ALL[tier_index];
            for item in filter_by_tier(&catalog, tier) {
                prop_assert!(item.subscription_tier.rank() <= tier.rank());
            }
        }

        #[test]
        fn prop_visibility_is_monotonic(catalog in arb_catalog()) {
            let basic: HashSet<String> = filter_by_tier(&catalog, SubscriptionTier::Basic)
                .into_iter().map(|item| item.id).collect();
            let standard: HashSet<String> = filter_by_tier(&catalog, SubscriptionTier::Standard)
                .into_iter().map(|item| item.id).collect();
            let premium: HashSet<String> = filter_by_tier(&catalog, SubscriptionTier::Premium)
                .into_iter().map(|item| item.id).collect();

            prop_assert!(basic.is_subset(&standard));
            prop_assert!(standard.is_subset(&premium));
        }

        #[test]
        fn prop_catalog_order_is_preserved(catalog in arb_catalog(), tier_index in 0usize..3) {
            let tier = SubscriptionTier::ALL[tier_index];
            let visible = filter_by_tier(&catalog, tier);

            let positions: Vec<usize> = visible
                .iter()
                .map(|item| catalog.iter().position(|c| c.id == item.id).unwrap())
                .collect();
            prop_assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));

            let expected = catalog.iter().filter(|item| tier.unlocks(item.subscription_tier)).count();
            prop_assert_eq!(visible.len(), expected);
        }
    }
}
