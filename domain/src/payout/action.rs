use serde::{Deserialize, Serialize};

use crate::ParticipantId;

use super::input::deserialize_amount;
use super::reward::RewardKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Section {
    RewardQuantities,
    RewardPrices,
}

/// Every edit the calculator accepts. Amount fields go through the lenient
/// input parse when deserialized, so a reducer never sees a malformed number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum PayoutAction {
    SetNumericField {
        section: Section,
        field: RewardKind,
        #[serde(deserialize_with = "deserialize_amount")]
        value: u64,
    },
    RenameParticipant {
        participant_id: ParticipantId,
        new_name: String,
    },
    SetParticipantExpenses {
        participant_id: ParticipantId,
        #[serde(deserialize_with = "deserialize_amount")]
        new_expenses: u64,
    },
    RemoveParticipant {
        participant_id: ParticipantId,
    },
    AddParticipant,
    /// Any action tag this version does not know. Applying it changes nothing.
    #[serde(other)]
    Unrecognized,
}

impl PayoutAction {
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            PayoutAction::SetNumericField { .. } => "SetNumericField",
            PayoutAction::RenameParticipant { .. } => "RenameParticipant",
            PayoutAction::SetParticipantExpenses { .. } => "SetParticipantExpenses",
            PayoutAction::RemoveParticipant { .. } => "RemoveParticipant",
            PayoutAction::AddParticipant => "AddParticipant",
            PayoutAction::Unrecognized => "Unrecognized",
        }
    }
}
