use crate::shared::ClubId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Club {
    pub id: ClubId,
    pub name: String,
    pub league: String,
    pub location: String,
    pub logo_url: String,
}

/// Club details as submitted before an id is allocated.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClubDraft {
    pub name: String,
    pub league: String,
    pub location: String,
    #[serde(default)]
    pub logo_url: Option<String>,
}

impl ClubDraft {
    pub fn into_club(self, id: ClubId) -> Club {
        let logo_url = self
            .logo_url
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| format!("https://ui-avatars.com/api/?name={}", plus_joined(&self.name)));

        Club {
            id,
            name: self.name.trim().to_string(),
            league: self.league.trim().to_string(),
            location: self.location.trim().to_string(),
            logo_url,
        }
    }
}

pub(crate) fn plus_joined(name: &str) -> String {
    name.split_whitespace()
        .map(|word| word.chars().filter(|c| c.is_alphanumeric()).collect::<String>())
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join("+")
}
