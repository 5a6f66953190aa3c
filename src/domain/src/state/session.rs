use crate::shared::{ClubId, RefereeId};
use serde::Serialize;

/// Who is using the application right now.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "role", content = "id", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Session {
    #[default]
    Guest,
    Club(ClubId),
    Referee(RefereeId),
}

impl Session {
    pub fn club_id(&self) -> Option<&ClubId> {
        match self {
            Session::Club(id) => Some(id),
            Session::Guest | Session::Referee(_) => None,
        }
    }

    pub fn referee_id(&self) -> Option<&RefereeId> {
        match self {
            Session::Referee(id) => Some(id),
            Session::Guest | Session::Club(_) => None,
        }
    }
}
