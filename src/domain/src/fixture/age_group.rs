use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum AgeGroup {
    Under(u8),
    Adults,
}

impl AgeGroup {
    pub fn is_adult(&self) -> bool {
        matches!(self, AgeGroup::Adults)
    }

    /// Older youth football (U16 and up) plays closer to the open-age game.
    pub fn is_older_youth(&self) -> bool {
        matches!(self, AgeGroup::Under(age) if *age >= 16)
    }
}

impl Default for AgeGroup {
    fn default() -> Self {
        AgeGroup::Under(14)
    }
}

impl Display for AgeGroup {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            AgeGroup::Under(age) => write!(f, "U{}", age),
            AgeGroup::Adults => f.write_str("Adults"),
        }
    }
}

impl FromStr for AgeGroup {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();

        match value.to_ascii_lowercase().as_str() {
            "adults" | "adult" | "senior" | "open age" => return Ok(AgeGroup::Adults),
            _ => {}
        }

        value
            .strip_prefix('U')
            .or_else(|| value.strip_prefix('u'))
            .and_then(|age| age.parse::<u8>().ok())
            .filter(|age| (5..=23).contains(age))
            .map(AgeGroup::Under)
            .ok_or_else(|| format!("unknown age group '{}'", s))
    }
}

impl TryFrom<String> for AgeGroup {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<AgeGroup> for String {
    fn from(group: AgeGroup) -> Self {
        group.to_string()
    }
}
