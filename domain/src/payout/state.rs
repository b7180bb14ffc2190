use serde::Serialize;

use crate::ParticipantId;

use super::action::{PayoutAction, Section};
use super::participant::Participant;
use super::reward::{RewardKind, RewardPrices, RewardQuantities};

/// One immutable snapshot of the calculator. Edits go through
/// [`PayoutState::reduce`], which hands back a new snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PayoutState {
    reward_quantities: RewardQuantities,
    reward_prices: RewardPrices,
    participants: Vec<Participant>,
    // Highest id ever handed out, so removed ids are never issued again.
    last_participant_id: ParticipantId,
}

impl Default for PayoutState {
    fn default() -> Self {
        Self::new(
            RewardQuantities {
                cash: 9000,
                regular_bags: 225,
                inked_bags: 1,
                gold_bars: 5,
            },
            RewardPrices {
                regular_bags: 250,
                inked_bags: 50000,
                gold_bars: 5000,
            },
            vec![
                Participant::new(ParticipantId(1), 12500),
                Participant::new(ParticipantId(2), 12500),
                Participant::new(ParticipantId(3), 0),
            ],
        )
    }
}

impl PayoutState {
    /// Builds a snapshot from parts. Later participants with an id already
    /// on the roster are dropped to keep ids unique.
    #[must_use]
    pub fn new(
        reward_quantities: RewardQuantities,
        reward_prices: RewardPrices,
        participants: Vec<Participant>,
    ) -> Self {
        let mut roster: Vec<Participant> = Vec::with_capacity(participants.len());
        for participant in participants {
            if !roster.iter().any(|p| p.id == participant.id) {
                roster.push(participant);
            }
        }
        let last_participant_id = highest_id(&roster);

        Self {
            reward_quantities,
            reward_prices,
            participants: roster,
            last_participant_id,
        }
    }

    #[must_use]
    pub fn reward_quantities(&self) -> &RewardQuantities {
        &self.reward_quantities
    }

    #[must_use]
    pub fn reward_prices(&self) -> &RewardPrices {
        &self.reward_prices
    }

    #[must_use]
    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    #[must_use]
    pub fn participant(
        &self,
        participant_id: ParticipantId,
    ) -> Option<&Participant> {
        self.participants.iter().find(|p| p.id == participant_id)
    }

    /// Id the next `AddParticipant` will assign, or `None` when no unused
    /// id is left.
    #[must_use]
    pub fn next_participant_id(&self) -> Option<ParticipantId> {
        highest_id(&self.participants).max(self.last_participant_id).next()
    }

    #[must_use]
    pub fn reduce(
        &self,
        action: &PayoutAction,
    ) -> Self {
        match action {
            PayoutAction::SetNumericField { section, field, value } => {
                self.with_numeric_field(*section, *field, *value)
            }
            PayoutAction::RenameParticipant {
                participant_id,
                new_name,
            } => self.map_participant(*participant_id, |p| Participant {
                display_name: new_name.clone(),
                ..p.clone()
            }),
            PayoutAction::SetParticipantExpenses {
                participant_id,
                new_expenses,
            } => self.map_participant(*participant_id, |p| Participant {
                expenses: *new_expenses,
                ..p.clone()
            }),
            PayoutAction::RemoveParticipant { participant_id } => self.without_participant(*participant_id),
            PayoutAction::AddParticipant => self.with_new_participant(),
            PayoutAction::Unrecognized => self.clone(),
        }
    }

    fn with_numeric_field(
        &self,
        section: Section,
        field: RewardKind,
        value: u64,
    ) -> Self {
        match section {
            Section::RewardQuantities => Self {
                reward_quantities: self.reward_quantities.with(field, value),
                ..self.clone()
            },
            Section::RewardPrices => match self.reward_prices.with(field, value) {
                Some(reward_prices) => Self {
                    reward_prices,
                    ..self.clone()
                },
                None => self.clone(),
            },
        }
    }

    fn map_participant(
        &self,
        participant_id: ParticipantId,
        update: impl Fn(&Participant) -> Participant,
    ) -> Self {
        let participants = self
            .participants
            .iter()
            .map(|p| if p.id == participant_id { update(p) } else { p.clone() })
            .collect();
        Self {
            participants,
            ..self.clone()
        }
    }

    fn without_participant(
        &self,
        participant_id: ParticipantId,
    ) -> Self {
        let participants = self.participants.iter().filter(|p| p.id != participant_id).cloned().collect();
        Self {
            participants,
            ..self.clone()
        }
    }

    fn with_new_participant(&self) -> Self {
        let Some(id) = self.next_participant_id() else {
            return self.clone();
        };
        let mut participants = self.participants.clone();
        participants.push(Participant::new(id, 0));
        Self {
            participants,
            last_participant_id: id,
            ..self.clone()
        }
    }
}

/// Free-function form of [`PayoutState::reduce`].
#[must_use]
pub fn reduce(
    state: &PayoutState,
    action: &PayoutAction,
) -> PayoutState {
    state.reduce(action)
}

fn highest_id(participants: &[Participant]) -> ParticipantId {
    participants.iter().map(|p| p.id).max().unwrap_or(ParticipantId(0))
}
