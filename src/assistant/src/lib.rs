pub mod brief;
pub mod client;
pub mod config;
pub mod error;
pub mod prompt;
pub mod recommender;

pub use brief::BriefWriter;
pub use client::{CompletionClient, OllamaClient};
pub use config::AssistantConfig;
pub use error::AssistantError;
pub use recommender::{RankingBackend, Recommender, parse_ranking};

use log::{info, warn};
use std::sync::Arc;

/// Builds the shared collaborator, or `None` when the service is unusable.
/// Both requesters treat `None` as "degrade to fallback".
pub fn completion_client(config: &AssistantConfig) -> Option<Arc<dyn CompletionClient>> {
    match OllamaClient::from_config(config) {
        Ok(client) => {
            info!("assistant: model {} at {}:{}", config.model, config.host, config.port);
            Some(Arc::new(client))
        }
        Err(AssistantError::MissingCredential) => {
            warn!("No API key provided for the assistant, AI ranking and briefs disabled");
            None
        }
        Err(e) => {
            warn!("assistant disabled: {}", e);
            None
        }
    }
}
