use crate::referee::BadgeLevel;
use crate::shared::RefereeId;
use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Referee {
    pub id: RefereeId,
    pub name: String,
    pub badge_level: BadgeLevel,
    pub location: String,
    pub experience_years: u8,
    #[serde(with = "weekday_names")]
    pub available_days: Vec<Weekday>,
    pub avatar_url: String,

    // Compliance & safeguarding
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fa_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dob: Option<NaiveDate>,
    #[serde(default)]
    pub is_minor: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_contact: Option<String>,
}

impl Referee {
    pub fn is_available_on(&self, day: Weekday) -> bool {
        self.available_days.contains(&day)
    }

    /// A minor must carry a guardian contact.
    pub fn has_valid_safeguarding(&self) -> bool {
        !self.is_minor
            || self
                .parent_contact
                .as_deref()
                .is_some_and(|contact| !contact.trim().is_empty())
    }
}

pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

mod weekday_names {
    use super::weekday_name;
    use chrono::Weekday;
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(days: &[Weekday], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(days.iter().map(|day| weekday_name(*day)))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Weekday>, D::Error> {
        let names = Vec::<String>::deserialize(deserializer)?;

        let mut days = Vec::with_capacity(names.len());
        for name in names {
            let day = name
                .parse::<Weekday>()
                .map_err(|_| D::Error::custom(format!("unknown weekday '{}'", name)))?;
            if !days.contains(&day) {
                days.push(day);
            }
        }

        Ok(days)
    }
}
