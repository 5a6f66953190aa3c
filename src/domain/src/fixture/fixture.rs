use crate::club::Club;
use crate::fixture::AgeGroup;
use crate::shared::{ClubId, FixtureId, RefereeId};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FixtureStatus {
    Open,
    Matched {
        #[serde(rename = "assignedRefereeId")]
        referee_id: RefereeId,
    },
    Completed {
        #[serde(rename = "assignedRefereeId")]
        referee_id: RefereeId,
    },
}

impl FixtureStatus {
    pub fn name(&self) -> &'static str {
        match self {
            FixtureStatus::Open => "OPEN",
            FixtureStatus::Matched { .. } => "MATCHED",
            FixtureStatus::Completed { .. } => "COMPLETED",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("fixture {fixture_id} cannot move from {from} to {to}")]
pub struct TransitionError {
    pub fixture_id: FixtureId,
    pub from: &'static str,
    pub to: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fixture {
    pub id: FixtureId,
    pub club_id: ClubId,
    pub opponent: String,
    pub date: NaiveDate,
    #[serde(with = "kick_off")]
    pub time: NaiveTime,
    pub location: String,
    pub league: String,
    pub age_group: AgeGroup,
    #[serde(flatten)]
    pub status: FixtureStatus,
}

impl Fixture {
    pub fn is_open(&self) -> bool {
        self.status == FixtureStatus::Open
    }

    pub fn assigned_referee_id(&self) -> Option<&RefereeId> {
        match &self.status {
            FixtureStatus::Open => None,
            FixtureStatus::Matched { referee_id } | FixtureStatus::Completed { referee_id } => {
                Some(referee_id)
            }
        }
    }

    pub fn is_assigned_to(&self, referee_id: &RefereeId) -> bool {
        self.assigned_referee_id() == Some(referee_id)
    }

    /// OPEN -> MATCHED.
    pub fn assign(&mut self, referee_id: RefereeId) -> Result<(), TransitionError> {
        match self.status {
            FixtureStatus::Open => {
                self.status = FixtureStatus::Matched { referee_id };
                Ok(())
            }
            _ => Err(self.transition_error("MATCHED")),
        }
    }

    /// MATCHED -> COMPLETED.
    pub fn complete(&mut self) -> Result<(), TransitionError> {
        match &self.status {
            FixtureStatus::Matched { referee_id } => {
                self.status = FixtureStatus::Completed {
                    referee_id: referee_id.clone(),
                };
                Ok(())
            }
            _ => Err(self.transition_error("COMPLETED")),
        }
    }

    fn transition_error(&self, to: &'static str) -> TransitionError {
        TransitionError {
            fixture_id: self.id.clone(),
            from: self.status.name(),
            to,
        }
    }
}

/// A fixture as a club posts it. Blank fields are filled from the club.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixtureDraft {
    #[serde(default)]
    pub opponent: Option<String>,
    pub date: NaiveDate,
    #[serde(with = "kick_off")]
    pub time: NaiveTime,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub league: Option<String>,
    #[serde(default)]
    pub age_group: Option<AgeGroup>,
}

impl FixtureDraft {
    pub fn into_fixture(self, id: FixtureId, club: &Club) -> Fixture {
        let non_blank = |value: Option<String>| {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        Fixture {
            id,
            club_id: club.id.clone(),
            opponent: non_blank(self.opponent).unwrap_or_else(|| "TBD".to_string()),
            date: self.date,
            time: self.time,
            location: non_blank(self.location).unwrap_or_else(|| club.location.clone()),
            league: non_blank(self.league).unwrap_or_else(|| club.league.clone()),
            age_group: self.age_group.unwrap_or_default(),
            status: FixtureStatus::Open,
        }
    }
}

mod kick_off {
    use chrono::NaiveTime;
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&time.format(FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let value = String::deserialize(deserializer)?;

        NaiveTime::parse_from_str(&value, FORMAT)
            .or_else(|_| NaiveTime::parse_from_str(&value, "%H:%M:%S"))
            .map_err(|e| D::Error::custom(format!("invalid kick-off time '{}': {}", value, e)))
    }
}
