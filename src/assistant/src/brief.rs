use crate::client::CompletionClient;
use crate::error::AssistantError;
use crate::prompt::brief_prompt;
use domain::Fixture;
use log::{debug, warn};
use std::sync::Arc;
use std::time::Instant;

pub const NO_CREDENTIAL_BRIEF: &str = "Have a great game!";
pub const EMPTY_BRIEF: &str = "Have a good game!";
pub const FAILED_BRIEF: &str = "Good luck with the match!";

/// Writes the short pre-match note shown on a referee's assignments.
/// Never fails: every problem maps to one of the fixed fallbacks.
pub struct BriefWriter {
    client: Option<Arc<dyn CompletionClient>>,
}

impl BriefWriter {
    pub fn new(client: Option<Arc<dyn CompletionClient>>) -> Self {
        BriefWriter { client }
    }

    pub async fn write(&self, fixture: &Fixture, referee_name: &str) -> String {
        let Some(client) = &self.client else {
            return NO_CREDENTIAL_BRIEF.to_string();
        };

        let now = Instant::now();

        let result = client.complete(&brief_prompt(fixture, referee_name)).await;

        debug!("brief for fixture {} in {} ms", fixture.id, now.elapsed().as_millis());

        match result {
            Ok(text) if !text.trim().is_empty() => text.trim().to_string(),
            Ok(_) | Err(AssistantError::EmptyResponse) => EMPTY_BRIEF.to_string(),
            Err(e) => {
                warn!("brief for fixture {} failed: {}", fixture.id, e);
                FAILED_BRIEF.to_string()
            }
        }
    }
}
