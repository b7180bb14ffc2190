use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RewardKind {
    Cash,
    RegularBags,
    InkedBags,
    GoldBars,
}

impl RewardKind {
    /// Kinds valued as quantity times unit price.
    pub const COUNTABLE: [RewardKind; 3] = [RewardKind::RegularBags, RewardKind::InkedBags, RewardKind::GoldBars];
}

/// Pooled reward amounts. `cash` is money, everything else is a count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewardQuantities {
    pub cash: u64,
    pub regular_bags: u64,
    pub inked_bags: u64,
    pub gold_bars: u64,
}

impl RewardQuantities {
    #[must_use]
    pub fn get(
        &self,
        kind: RewardKind,
    ) -> u64 {
        match kind {
            RewardKind::Cash => self.cash,
            RewardKind::RegularBags => self.regular_bags,
            RewardKind::InkedBags => self.inked_bags,
            RewardKind::GoldBars => self.gold_bars,
        }
    }

    #[must_use]
    pub fn with(
        mut self,
        kind: RewardKind,
        value: u64,
    ) -> Self {
        match kind {
            RewardKind::Cash => self.cash = value,
            RewardKind::RegularBags => self.regular_bags = value,
            RewardKind::InkedBags => self.inked_bags = value,
            RewardKind::GoldBars => self.gold_bars = value,
        }
        self
    }
}

/// Unit prices for the countable reward kinds. There is no slot for cash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewardPrices {
    pub regular_bags: u64,
    pub inked_bags: u64,
    pub gold_bars: u64,
}

impl RewardPrices {
    #[must_use]
    pub fn get(
        &self,
        kind: RewardKind,
    ) -> Option<u64> {
        match kind {
            RewardKind::Cash => None,
            RewardKind::RegularBags => Some(self.regular_bags),
            RewardKind::InkedBags => Some(self.inked_bags),
            RewardKind::GoldBars => Some(self.gold_bars),
        }
    }

    /// Returns `None` when `kind` has no price slot.
    #[must_use]
    pub fn with(
        mut self,
        kind: RewardKind,
        value: u64,
    ) -> Option<Self> {
        match kind {
            RewardKind::Cash => return None,
            RewardKind::RegularBags => self.regular_bags = value,
            RewardKind::InkedBags => self.inked_bags = value,
            RewardKind::GoldBars => self.gold_bars = value,
        }
        Some(self)
    }
}
