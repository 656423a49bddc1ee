//! Request bodies sent to the backend.

use crate::state::DraftBet;
use serde::{Deserialize, Serialize};

/// Body of `POST /bets/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBet {
    pub topic: String,
    pub terms: String,
    pub participants: Vec<String>,
}

impl From<&DraftBet> for NewBet {
    fn from(draft: &DraftBet) -> Self {
        Self {
            topic: draft.topic.clone(),
            terms: draft.terms.clone(),
            participants: draft.participant_names(),
        }
    }
}

/// Body of `POST /bets/{id}/sign`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignRequest {
    pub initials: String,
}
