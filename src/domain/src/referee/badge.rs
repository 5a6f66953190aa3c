use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// FA refereeing level. Level 1 is the top of the pyramid, level 9 a trainee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BadgeLevel(u8);

impl BadgeLevel {
    pub const HIGHEST: u8 = 1;
    pub const LOWEST: u8 = 9;

    pub fn new(level: u8) -> Option<Self> {
        (Self::HIGHEST..=Self::LOWEST)
            .contains(&level)
            .then_some(BadgeLevel(level))
    }

    pub fn level(&self) -> u8 {
        self.0
    }

    /// Levels 5 and above are appointed to open-age football.
    pub fn is_senior(&self) -> bool {
        self.0 <= 5
    }

    /// 0.0 for a trainee up to 1.0 for level 1.
    pub fn tier_ratio(&self) -> f32 {
        (Self::LOWEST - self.0) as f32 / (Self::LOWEST - Self::HIGHEST) as f32
    }

    fn label(&self) -> Option<&'static str> {
        match self.0 {
            9 => Some("Trainee"),
            7 => Some("Junior"),
            6 => Some("County"),
            5 => Some("Senior"),
            _ => None,
        }
    }
}

impl Default for BadgeLevel {
    fn default() -> Self {
        BadgeLevel(7)
    }
}

impl PartialOrd for BadgeLevel {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Higher tier compares greater.
impl Ord for BadgeLevel {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other.0.cmp(&self.0)
    }
}

impl Display for BadgeLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.label() {
            Some(label) => write!(f, "Level {} ({})", self.0, label),
            None => write!(f, "Level {}", self.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognised badge level '{0}'")]
pub struct BadgeLevelParseError(String);

impl FromStr for BadgeLevel {
    type Err = BadgeLevelParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let rest = trimmed
            .strip_prefix("Level")
            .or_else(|| trimmed.strip_prefix("level"))
            .unwrap_or(trimmed)
            .trim_start();

        let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();

        digits
            .parse::<u8>()
            .ok()
            .and_then(BadgeLevel::new)
            .ok_or_else(|| BadgeLevelParseError(s.to_string()))
    }
}

impl TryFrom<String> for BadgeLevel {
    type Error = BadgeLevelParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<BadgeLevel> for String {
    fn from(level: BadgeLevel) -> Self {
        level.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_registration_labels() {
        assert_eq!("Level 9 (Trainee)".parse::<BadgeLevel>().unwrap().level(), 9);
        assert_eq!("Level 5 (Senior)".parse::<BadgeLevel>().unwrap().level(), 5);
        assert_eq!("Level 4".parse::<BadgeLevel>().unwrap().level(), 4);
        assert_eq!("6".parse::<BadgeLevel>().unwrap().level(), 6);
    }

    #[test]
    fn test_rejects_out_of_range_levels() {
        assert!("Level 0".parse::<BadgeLevel>().is_err());
        assert!("Level 10".parse::<BadgeLevel>().is_err());
        assert!("Senior".parse::<BadgeLevel>().is_err());
    }

    #[test]
    fn test_display_round_trips_labels() {
        let level = BadgeLevel::new(7).unwrap();
        assert_eq!(level.to_string(), "Level 7 (Junior)");
        assert_eq!(BadgeLevel::new(4).unwrap().to_string(), "Level 4");
    }

    #[test]
    fn test_lower_number_is_higher_tier() {
        let senior = BadgeLevel::new(4).unwrap();
        let junior = BadgeLevel::new(7).unwrap();

        assert!(senior > junior);
        assert!(senior.is_senior());
        assert!(!junior.is_senior());
        assert!(senior.tier_ratio() > junior.tier_ratio());
    }
}
