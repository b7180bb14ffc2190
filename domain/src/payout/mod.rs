mod action;
mod calculator;
mod config;
mod input;
mod participant;
mod reward;
mod state;


pub use action::{PayoutAction, Section};
pub use calculator::{ParticipantCut, PayoutSummary, gross_payout, net_payout, participant_cuts, total_expenses};
pub use config::{CalculatorConfig, SplitStrategy};
pub use input::parse_amount;
pub use participant::Participant;
pub use reward::{RewardKind, RewardPrices, RewardQuantities};
pub use state::{PayoutState, reduce};
