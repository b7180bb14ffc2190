use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::DomainError;

/// How the pooled payout is divided once expenses are known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SplitStrategy {
    /// Everyone gets their own expenses back, then the remainder is split
    /// evenly. Cuts are floored.
    #[default]
    ReimburseExpenses,
    /// Everyone gets an even share of the gross, shifted by how far their
    /// expenses sit from the crew average. Cuts are rounded half up.
    AverageExpenses,
}

impl fmt::Display for SplitStrategy {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            SplitStrategy::ReimburseExpenses => f.write_str("reimburse"),
            SplitStrategy::AverageExpenses => f.write_str("average"),
        }
    }
}

impl FromStr for SplitStrategy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reimburse" | "reimburseexpenses" => Ok(SplitStrategy::ReimburseExpenses),
            "average" | "averageexpenses" => Ok(SplitStrategy::AverageExpenses),
            _ => Err(DomainError::UnknownSplitStrategy(s.to_string())),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CalculatorConfig {
    pub split_strategy: SplitStrategy,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_strategy_names() {
        assert_eq!("reimburse".parse(), Ok(SplitStrategy::ReimburseExpenses));
        assert_eq!(" Average ".parse(), Ok(SplitStrategy::AverageExpenses));
        assert_eq!("averageExpenses".parse(), Ok(SplitStrategy::AverageExpenses));
        assert_eq!(
            "evenly".parse::<SplitStrategy>(),
            Err(DomainError::UnknownSplitStrategy("evenly".to_string()))
        );
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for strategy in [SplitStrategy::ReimburseExpenses, SplitStrategy::AverageExpenses] {
            assert_eq!(strategy.to_string().parse(), Ok(strategy));
        }
    }
}
