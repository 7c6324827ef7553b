//! User accounts and subscription plans.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::tier::SubscriptionTier;

/// Billing state of a subscription.
///
/// Unrecognized values read from external data become `Inactive`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum SubscriptionStatus {
    Active,
    Inactive,
    Cancelled,
}

impl From<String> for SubscriptionStatus {
    fn from(value: String) -> Self {
        match value.to_lowercase().as_str() {
            "active" => Self::Active,
            "cancelled" | "canceled" => Self::Cancelled,
            _ => Self::Inactive,
        }
    }
}

/// A signed-in principal as seen by the catalog.
///
/// Produced by a session provider; read-only everywhere else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAccount {
    pub id: String,
    pub email: String,
    pub full_name: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
    pub subscription_tier: SubscriptionTier,
    pub subscription_status: SubscriptionStatus,
    pub created_at: DateTime<Utc>,
}

impl UserAccount {
    /// Tier used to gate content for this account.
    ///
    /// Only an active subscription grants its tier; anything else browses as basic.
    pub fn effective_tier(&self) -> SubscriptionTier {
        match self.subscription_status {
            SubscriptionStatus::Active => self.subscription_tier,
            SubscriptionStatus::Inactive | SubscriptionStatus::Cancelled => {
                SubscriptionTier::Basic
            }
        }
    }
}

/// A purchasable subscription plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    pub tier: SubscriptionTier,
    pub name: String,
    /// Monthly price in US cents
    pub monthly_price_cents: u32,
    pub features: Vec<String>,
}

impl Plan {
    /// Price formatted for display, e.g. `$14.99/month`.
    pub fn format_price(&self) -> String {
        format!(
            "${}.{:02}/month",
            self.monthly_price_cents / 100,
            self.monthly_price_cents % 100
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(tier: SubscriptionTier, status: SubscriptionStatus) -> UserAccount {
        UserAccount {
            id: "2".to_string(),
            email: "premium@example.com".to_string(),
            full_name: "Premium User".to_string(),
            avatar_url: None,
            subscription_tier: tier,
            subscription_status: status,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_effective_tier_requires_active_status() {
        let active = account(SubscriptionTier::Premium, SubscriptionStatus::Active);
        assert_eq!(active.effective_tier(), SubscriptionTier::Premium);

        let lapsed = account(SubscriptionTier::Premium, SubscriptionStatus::Cancelled);
        assert_eq!(lapsed.effective_tier(), SubscriptionTier::Basic);

        let inactive = account(SubscriptionTier::Standard, SubscriptionStatus::Inactive);
        assert_eq!(inactive.effective_tier(), SubscriptionTier::Basic);
    }

    #[test]
    fn test_unknown_status_reads_as_inactive() {
        let status: SubscriptionStatus = serde_json::from_str("\"trialing\"").unwrap();
        assert_eq!(status, SubscriptionStatus::Inactive);

        let status: SubscriptionStatus = serde_json::from_str("\"Active\"").unwrap();
        assert_eq!(status, SubscriptionStatus::Active);
    }

    #[test]
    fn test_plan_price_formatting() {
        let plan = Plan {
            tier: SubscriptionTier::Standard,
            name: "Standard".to_string(),
            monthly_price_cents: 1499,
            features: Vec::new(),
        };
        assert_eq!(plan.format_price(), "$14.99/month");
    }
}
