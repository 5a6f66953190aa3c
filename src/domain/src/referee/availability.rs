use crate::referee::Referee;
use chrono::{Datelike, NaiveDate, Weekday};
use std::str::FromStr;

/// How a fixture date is turned into the availability day a referee must offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AvailabilityPolicy {
    /// Sunday fixtures need Sunday availability, every other day needs Saturday.
    #[default]
    WeekendBuckets,
    /// The fixture's own weekday must be offered.
    ExactWeekday,
}

impl AvailabilityPolicy {
    pub fn required_day(&self, date: NaiveDate) -> Weekday {
        let weekday = date.weekday();

        match self {
            AvailabilityPolicy::WeekendBuckets => {
                if weekday == Weekday::Sun {
                    Weekday::Sun
                } else {
                    Weekday::Sat
                }
            }
            AvailabilityPolicy::ExactWeekday => weekday,
        }
    }
}

impl FromStr for AvailabilityPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "weekend" | "weekend-buckets" => Ok(AvailabilityPolicy::WeekendBuckets),
            "exact" | "exact-weekday" => Ok(AvailabilityPolicy::ExactWeekday),
            other => Err(format!("unknown availability policy '{}'", other)),
        }
    }
}

/// Referees from `pool` able to take a fixture on `date`, in pool order.
pub fn available_referees<'a>(
    date: NaiveDate,
    pool: &'a [Referee],
    policy: AvailabilityPolicy,
) -> Vec<&'a Referee> {
    let day = policy.required_day(date);

    pool.iter()
        .filter(|referee| referee.is_available_on(day))
        .collect()
}
