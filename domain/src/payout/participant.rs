use serde::{Deserialize, Serialize};

use crate::ParticipantId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    pub id: ParticipantId,
    pub display_name: String,
    pub expenses: u64,
}

impl Participant {
    /// A participant carrying the default `Player {id}` name.
    #[must_use]
    pub fn new(
        id: ParticipantId,
        expenses: u64,
    ) -> Self {
        Self {
            id,
            display_name: format!("Player {id}"),
            expenses,
        }
    }
}
