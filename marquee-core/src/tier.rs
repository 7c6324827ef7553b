//! Subscription tiers and the ordering that gates content access.

use serde::{Deserialize, Serialize};

/// Subscription level gating content visibility.
///
/// Totally ordered: `Basic < Standard < Premium`. A viewer on tier `T` may
/// watch an item requiring tier `R` exactly when `T.rank() >= R.rank()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionTier {
    Basic,
    Standard,
    Premium,
}

/// Ordinal table backing tier comparison.
const TIER_RANKS: [(SubscriptionTier, u8); 3] = [
    (SubscriptionTier::Basic, 0),
    (SubscriptionTier::Standard, 1),
    (SubscriptionTier::Premium, 2),
];

impl SubscriptionTier {
    /// All tiers, lowest first.
    pub const ALL: [SubscriptionTier; 3] = [Self::Basic, Self::Standard, Self::Premium];

    /// Ordinal position of this tier; higher unlocks more content.
    pub fn rank(self) -> u8 {
        TIER_RANKS
            .iter()
            .find(|(tier, _)| *tier == self)
            .map(|(_, rank)| *rank)
            .unwrap_or(0)
    }

    /// Whether a viewer on this tier may access content requiring `required`.
    pub fn unlocks(self, required: SubscriptionTier) -> bool {
        self.rank() >= required.rank()
    }

    /// Lenient parse used at request boundaries.
    ///
    /// Missing, blank or unrecognized values resolve to `Basic`.
    pub fn parse_or_default(raw: Option<&str>) -> Self {
        raw.and_then(|value| value.parse().ok())
            .unwrap_or(Self::Basic)
    }

    /// Lowercase wire name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Standard => "standard",
            Self::Premium => "premium",
        }
    }
}

impl Default for SubscriptionTier {
    fn default() -> Self {
        Self::Basic
    }
}

impl PartialOrd for SubscriptionTier {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SubscriptionTier {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl std::fmt::Display for SubscriptionTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SubscriptionTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "basic" => Ok(Self::Basic),
            "standard" => Ok(Self::Standard),
            "premium" => Ok(Self::Premium),
            _ => Err(format!(
                "Invalid subscription tier: '{s}'. Valid options are: basic, standard, premium"
            )),
        }
    }
}
