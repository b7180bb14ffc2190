use serde::Serialize;

use super::config::SplitStrategy;
use super::participant::Participant;
use super::reward::RewardKind;
use super::state::PayoutState;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantCut {
    #[serde(flatten)]
    pub participant: Participant,
    pub cut: i64,
}

/// Everything derived from a snapshot. Recomputed on every read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PayoutSummary {
    pub gross_payout: u64,
    pub total_expenses: u64,
    pub net_payout: i64,
    pub split_strategy: SplitStrategy,
    pub cuts: Vec<ParticipantCut>,
}

impl PayoutSummary {
    #[must_use]
    pub fn compute(
        state: &PayoutState,
        strategy: SplitStrategy,
    ) -> Self {
        Self {
            gross_payout: gross_payout(state),
            total_expenses: total_expenses(state),
            net_payout: net_payout(state),
            split_strategy: strategy,
            cuts: participant_cuts(state, strategy),
        }
    }
}

/// Cash plus quantity times unit price for every countable reward.
#[must_use]
pub fn gross_payout(state: &PayoutState) -> u64 {
    let quantities = state.reward_quantities();
    let prices = state.reward_prices();

    RewardKind::COUNTABLE.into_iter().fold(quantities.cash, |acc, kind| {
        let value = quantities.get(kind).saturating_mul(prices.get(kind).unwrap_or(0));
        acc.saturating_add(value)
    })
}

#[must_use]
pub fn total_expenses(state: &PayoutState) -> u64 {
    state.participants().iter().fold(0u64, |acc, p| acc.saturating_add(p.expenses))
}

/// Gross payout minus all declared expenses. Negative when the crew spent
/// more than it took.
#[must_use]
pub fn net_payout(state: &PayoutState) -> i64 {
    to_signed(gross_payout(state)).saturating_sub(to_signed(total_expenses(state)))
}

/// Per-participant cuts in roster order. An empty roster yields no cuts.
///
/// Computed in exact integer arithmetic, so the cuts of the reimbursement
/// split always sum to the gross payout minus less than one unit per
/// participant.
#[must_use]
pub fn participant_cuts(
    state: &PayoutState,
    strategy: SplitStrategy,
) -> Vec<ParticipantCut> {
    let participants = state.participants();
    if participants.is_empty() {
        return Vec::new();
    }
    let count = participants.len() as i128;
    let net = i128::from(gross_payout(state)) - i128::from(total_expenses(state));

    participants
        .iter()
        .map(|p| {
            let expenses = i128::from(p.expenses);
            let cut = match strategy {
                // floor(net / n + expenses)
                SplitStrategy::ReimburseExpenses => net.div_euclid(count) + expenses,
                // round half up of (n * expenses + net) / n
                SplitStrategy::AverageExpenses => {
                    (2 * (count * expenses + net) + count).div_euclid(2 * count)
                }
            };
            ParticipantCut {
                participant: p.clone(),
                cut: clamp_to_i64(cut),
            }
        })
        .collect()
}

fn clamp_to_i64(value: i128) -> i64 {
    i64::try_from(value).unwrap_or(if value < 0 { i64::MIN } else { i64::MAX })
}

fn to_signed(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ParticipantId, PayoutAction};

    fn crew_with_expenses(expenses: &[u64]) -> PayoutState {
        let participants = expenses
            .iter()
            .enumerate()
            .map(|(i, &e)| Participant::new(ParticipantId(i as u32 + 1), e))
            .collect();
        PayoutState::new(*PayoutState::default().reward_quantities(), *PayoutState::default().reward_prices(), participants)
    }

    #[test]
    fn seed_gross_payout() {
        let state = PayoutState::default();
        assert_eq!(gross_payout(&state), 9000 + 225 * 250 + 50000 + 5 * 5000);
        assert_eq!(gross_payout(&state), 140250);
        assert_eq!(total_expenses(&state), 25000);
        assert_eq!(net_payout(&state), 115250);
    }

    #[test]
    fn reimbursement_cuts_for_seed() {
        let cuts: Vec<i64> = participant_cuts(&PayoutState::default(), SplitStrategy::ReimburseExpenses)
            .into_iter()
            .map(|c| c.cut)
            .collect();
        assert_eq!(cuts, vec![50916, 50916, 38416]);
    }

    #[test]
    fn averaging_cuts_for_seed() {
        let cuts: Vec<i64> = participant_cuts(&PayoutState::default(), SplitStrategy::AverageExpenses)
            .into_iter()
            .map(|c| c.cut)
            .collect();
        assert_eq!(cuts, vec![50917, 50917, 38417]);
    }

    #[test]
    fn empty_roster_has_no_cuts() {
        let state = crew_with_expenses(&[]);
        assert!(participant_cuts(&state, SplitStrategy::ReimburseExpenses).is_empty());
        assert!(participant_cuts(&state, SplitStrategy::AverageExpenses).is_empty());
        assert_eq!(gross_payout(&state), 140250);
    }

    #[test]
    fn expenses_beyond_payout_go_negative() {
        let state = crew_with_expenses(&[200_000, 0]);
        assert_eq!(net_payout(&state), 140250 - 200_000);

        let cuts: Vec<i64> = participant_cuts(&state, SplitStrategy::ReimburseExpenses)
            .into_iter()
            .map(|c| c.cut)
            .collect();
        // -59750 / 2 = -29875
        assert_eq!(cuts, vec![170125, -29875]);
    }

    #[test]
    fn reimbursement_conserves_gross_within_rounding() {
        let crews: [(u64, &[u64]); 6] = [
            (9000, &[0, 0, 0]),
            (9000, &[1, 2, 3, 4, 5, 6, 7]),
            (9000, &[12500, 333, 0, 17]),
            (9000, &[999_999]),
            (100_000_000_000_000_001, &[1, 0, 0]),
            (u64::MAX / 2, &[u64::MAX / 4, 3, 0, 0, 0]),
        ];
        for (cash, expenses) in crews {
            let state = crew_with_expenses(expenses).reduce(&PayoutAction::SetNumericField {
                section: crate::Section::RewardQuantities,
                field: RewardKind::Cash,
                value: cash,
            });
            let total: i128 = participant_cuts(&state, SplitStrategy::ReimburseExpenses)
                .iter()
                .map(|c| i128::from(c.cut))
                .sum();
            let gross = i128::from(gross_payout(&state));
            let slack = expenses.len() as i128;
            assert!(
                total <= gross && gross - total < slack.max(1),
                "sum of cuts {total} drifted from gross {gross} for cash {cash} and {expenses:?}"
            );
        }
    }

    #[test]
    fn large_amounts_split_exactly() {
        let state = crew_with_expenses(&[1, 0, 0]).reduce(&PayoutAction::SetNumericField {
            section: crate::Section::RewardQuantities,
            field: RewardKind::Cash,
            value: 100_000_000_000_000_001,
        });
        // gross = 100_000_000_000_000_001 + 131_250, net = gross - 1
        let share = (100_000_000_000_000_000i64 + 131_250) / 3;
        let cuts: Vec<i64> = participant_cuts(&state, SplitStrategy::ReimburseExpenses)
            .into_iter()
            .map(|c| c.cut)
            .collect();
        assert_eq!(cuts, vec![share + 1, share, share]);
    }

    #[test]
    fn averaging_rounds_half_up() {
        // gross 140250 over two with expenses 1 and 0: 70125.5 and 70124.5
        let state = crew_with_expenses(&[1, 0]);
        let cuts: Vec<i64> = participant_cuts(&state, SplitStrategy::AverageExpenses)
            .into_iter()
            .map(|c| c.cut)
            .collect();
        assert_eq!(cuts, vec![70126, 70125]);
    }

    #[test]
    fn zero_price_kinds_contribute_nothing() {
        let state = PayoutState::default().reduce(&PayoutAction::SetNumericField {
            section: crate::Section::RewardPrices,
            field: RewardKind::InkedBags,
            value: 0,
        });
        assert_eq!(gross_payout(&state), 140250 - 50000);
    }

    #[test]
    fn saturates_instead_of_overflowing() {
        let state = PayoutState::default().reduce(&PayoutAction::SetNumericField {
            section: crate::Section::RewardQuantities,
            field: RewardKind::GoldBars,
            value: u64::MAX,
        });
        assert_eq!(gross_payout(&state), u64::MAX);
        assert_eq!(net_payout(&state), i64::MAX - 25000);
    }

    #[test]
    fn summary_collects_all_derived_values() {
        let summary = PayoutSummary::compute(&PayoutState::default(), SplitStrategy::default());
        assert_eq!(summary.gross_payout, 140250);
        assert_eq!(summary.total_expenses, 25000);
        assert_eq!(summary.net_payout, 115250);
        assert_eq!(summary.split_strategy, SplitStrategy::ReimburseExpenses);
        assert_eq!(summary.cuts.len(), 3);
        assert_eq!(summary.cuts[2].participant.display_name, "Player 3");
    }
}
