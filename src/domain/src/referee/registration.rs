use crate::club::plus_joined;
use crate::referee::{BadgeLevel, Referee};
use crate::shared::{RefereeId, SOUTHAMPTON_AREAS, is_known_area};
use chrono::{NaiveDate, Weekday};
use serde::Deserialize;

pub const ADULT_AGE: u32 = 18;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistrationError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("'{0}' is not a Southampton area")]
    UnknownArea(String),
    #[error("date of birth {0} is in the future")]
    BirthDateInFuture(NaiveDate),
    #[error("parent/guardian {0} is required for referees under 18")]
    GuardianRequired(&'static str),
    #[error("'{0}' is not a valid email address")]
    InvalidGuardianEmail(String),
}

/// Referee sign-up form. Validated as a whole, so a rejected form never
/// produces a partial referee.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationForm {
    pub name: String,
    #[serde(default)]
    pub email: String,
    pub fa_number: String,
    pub dob: Option<NaiveDate>,
    #[serde(default = "default_location")]
    pub location: String,
    #[serde(default)]
    pub badge_level: BadgeLevel,
    #[serde(default)]
    pub parent_name: String,
    #[serde(default)]
    pub parent_email: String,
}

fn default_location() -> String {
    SOUTHAMPTON_AREAS[0].to_string()
}

/// Whole years between `dob` and `today`, or `None` if `dob` is after `today`.
pub fn age_on(dob: NaiveDate, today: NaiveDate) -> Option<u32> {
    today.years_since(dob)
}

impl RegistrationForm {
    pub fn validate(&self, today: NaiveDate) -> Result<(), RegistrationError> {
        self.checked_age(today).map(|_| ())
    }

    pub fn is_minor(&self, today: NaiveDate) -> bool {
        self.dob
            .and_then(|dob| age_on(dob, today))
            .is_some_and(|age| age < ADULT_AGE)
    }

    fn checked_age(&self, today: NaiveDate) -> Result<u32, RegistrationError> {
        if self.name.trim().is_empty() {
            return Err(RegistrationError::MissingField("name"));
        }

        if self.fa_number.trim().is_empty() {
            return Err(RegistrationError::MissingField("FA number"));
        }

        let dob = self.dob.ok_or(RegistrationError::MissingField("date of birth"))?;
        let age = age_on(dob, today).ok_or(RegistrationError::BirthDateInFuture(dob))?;

        if !is_known_area(&self.location) {
            return Err(RegistrationError::UnknownArea(self.location.clone()));
        }

        if age < ADULT_AGE {
            if self.parent_name.trim().is_empty() {
                return Err(RegistrationError::GuardianRequired("name"));
            }

            let parent_email = self.parent_email.trim();
            if parent_email.is_empty() {
                return Err(RegistrationError::GuardianRequired("email"));
            }

            if !looks_like_email(parent_email) {
                return Err(RegistrationError::InvalidGuardianEmail(parent_email.to_string()));
            }
        }

        Ok(age)
    }

    /// Validates the form and builds the referee record it describes.
    pub fn into_referee(self, id: RefereeId, today: NaiveDate) -> Result<Referee, RegistrationError> {
        let age = self.checked_age(today)?;
        let is_minor = age < ADULT_AGE;
        let name = self.name.trim().to_string();

        Ok(Referee {
            id,
            avatar_url: format!(
                "https://ui-avatars.com/api/?name={}&background=0D8ABC&color=fff",
                plus_joined(&name)
            ),
            name,
            badge_level: self.badge_level,
            location: self.location.trim().to_string(),
            experience_years: 0,
            available_days: vec![Weekday::Sat, Weekday::Sun],
            fa_number: Some(self.fa_number.trim().to_string()),
            dob: self.dob,
            is_minor,
            parent_contact: is_minor.then(|| self.parent_email.trim().to_string()),
        })
    }
}

fn looks_like_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.') && !domain.starts_with('.'),
        None => false,
    }
}
