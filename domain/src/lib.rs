mod error;
pub mod payout;
mod types;

pub use error::DomainError;
pub use payout::{
    CalculatorConfig, Participant, ParticipantCut, PayoutAction, PayoutState, PayoutSummary, RewardKind, RewardPrices,
    RewardQuantities, Section, SplitStrategy, gross_payout, net_payout, parse_amount, participant_cuts, reduce,
    total_expenses,
};
pub use types::{ParticipantId, SessionId};
