use crate::club::Club;
use crate::referee::Referee;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use std::{fs, io};

#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    #[error("cannot read roster: {0}")]
    Io(#[from] io::Error),
    #[error("invalid roster json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("duplicate id '{0}' in roster")]
    DuplicateId(String),
    #[error("referee {0} is a minor without a guardian contact")]
    MissingGuardian(String),
}

/// Clubs and referees known at startup.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Roster {
    #[serde(default)]
    pub clubs: Vec<Club>,
    #[serde(default)]
    pub referees: Vec<Referee>,
}

impl Roster {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RosterError> {
        let json = fs::read_to_string(path)?;
        let roster: Roster = serde_json::from_str(&json)?;
        roster.validate()?;
        Ok(roster)
    }

    pub fn validate(&self) -> Result<(), RosterError> {
        let mut club_ids = HashSet::new();
        for club in &self.clubs {
            if !club_ids.insert(club.id.as_str()) {
                return Err(RosterError::DuplicateId(club.id.to_string()));
            }
        }

        let mut referee_ids = HashSet::new();
        for referee in &self.referees {
            if !referee_ids.insert(referee.id.as_str()) {
                return Err(RosterError::DuplicateId(referee.id.to_string()));
            }
            if !referee.has_valid_safeguarding() {
                return Err(RosterError::MissingGuardian(referee.id.to_string()));
            }
        }

        Ok(())
    }
}
