use log::warn;
use std::env;
use std::str::FromStr;
use std::time::Duration;

pub const API_KEY_VAR: &str = "OLLAMA_API_KEY";

const DEFAULT_HOST: &str = "https://ollama.com";
const DEFAULT_PORT: u16 = 443;
const DEFAULT_MODEL: &str = "gpt-oss:20b";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Clone)]
pub struct AssistantConfig {
    pub api_key: Option<String>,
    pub host: String,
    pub port: u16,
    pub model: String,
    pub timeout: Duration,
}

impl std::fmt::Debug for AssistantConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AssistantConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("host", &self.host)
            .field("port", &self.port)
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Default for AssistantConfig {
    fn default() -> Self {
        AssistantConfig {
            api_key: None,
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            model: DEFAULT_MODEL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl AssistantConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = AssistantConfig::default();
        let value = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        AssistantConfig {
            api_key: value(API_KEY_VAR),
            host: value("OLLAMA_HOST").unwrap_or(defaults.host),
            port: parsed(value("OLLAMA_PORT"), "OLLAMA_PORT").unwrap_or(defaults.port),
            model: value("OLLAMA_MODEL").unwrap_or(defaults.model),
            timeout: parsed(value("OLLAMA_TIMEOUT_SECS"), "OLLAMA_TIMEOUT_SECS")
                .map(Duration::from_secs)
                .unwrap_or(defaults.timeout),
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
