use assistant::RankingBackend;
use domain::AvailabilityPolicy;
use log::warn;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

const DEFAULT_PORT: u16 = 18000;

#[derive(Debug, Clone)]
pub struct Settings {
    pub port: u16,
    pub availability: AvailabilityPolicy,
    pub ranking: RankingBackend,
    /// JSON file with the clubs and referees to start with.
    pub roster_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            port: DEFAULT_PORT,
            availability: AvailabilityPolicy::default(),
            ranking: RankingBackend::default(),
            roster_path: None,
        }
    }
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Settings::default();
        let value = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        Settings {
            port: parsed(value("PORT"), "PORT").unwrap_or(defaults.port),
            availability: parsed(value("AVAILABILITY_POLICY"), "AVAILABILITY_POLICY")
                .unwrap_or(defaults.availability),
            ranking: parsed(value("RANKING_BACKEND"), "RANKING_BACKEND").unwrap_or(defaults.ranking),
            roster_path: value("ROSTER_PATH").map(PathBuf::from),
        }
    }
}

fn parsed<T: FromStr>(value: Option<String>, key: &str) -> Option<T> {
    let value = value?;
    match value.parse() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            warn!("ignoring {}='{}', using default", key, value);
            None
        }
    }
}
