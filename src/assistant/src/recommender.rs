use crate::client::CompletionClient;
use crate::error::AssistantError;
use crate::prompt::ranking_prompt;
use domain::{
    Fixture, HeuristicRanker, MatchRecommendation, Referee, RefereeId, normalize_recommendations,
};
use log::{debug, warn};
use serde::Deserialize;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Instant;

/// Where recommendation scores come from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RankingBackend {
    #[default]
    Assistant,
    /// Deterministic local scoring, no network.
    Heuristic,
}

impl FromStr for RankingBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "assistant" | "ai" | "ollama" => Ok(RankingBackend::Assistant),
            "heuristic" | "local" => Ok(RankingBackend::Heuristic),
            other => Err(format!("unknown ranking backend '{}'", other)),
        }
    }
}

pub struct Recommender {
    client: Option<Arc<dyn CompletionClient>>,
    backend: RankingBackend,
    heuristic: HeuristicRanker,
}

impl Recommender {
    pub fn new(client: Option<Arc<dyn CompletionClient>>, backend: RankingBackend) -> Self {
        Recommender {
            client,
            backend,
            heuristic: HeuristicRanker::default(),
        }
    }

    pub fn backend(&self) -> RankingBackend {
        self.backend
    }

    /// Ranks `candidates` for `fixture`, best first. Any failure of the
    /// ranking service yields an empty list.
    pub async fn recommend(
        &self,
        fixture: &Fixture,
        candidates: &[Referee],
    ) -> Vec<MatchRecommendation> {
        if candidates.is_empty() {
            return Vec::new();
        }

        if self.backend == RankingBackend::Heuristic {
            return self.heuristic.rank(fixture, candidates);
        }

        let Some(client) = &self.client else {
            warn!("No API key provided for the assistant, fixture {} left unranked", fixture.id);
            return Vec::new();
        };

        match self.request(client.as_ref(), fixture, candidates).await {
            Ok(recommendations) => recommendations,
            Err(e) => {
                warn!("ranking fixture {} failed: {}", fixture.id, e);
                Vec::new()
            }
        }
    }

    async fn request(
        &self,
        client: &dyn CompletionClient,
        fixture: &Fixture,
        candidates: &[Referee],
    ) -> Result<Vec<MatchRecommendation>, AssistantError> {
        let prompt = ranking_prompt(fixture, candidates)
            .map_err(|e| AssistantError::Malformed(e.to_string()))?;

        let now = Instant::now();

        let text = client.complete(&prompt).await?;

        debug!(
            "fixture {} ranked by assistant in {} ms",
            fixture.id,
            now.elapsed().as_millis()
        );

        parse_ranking(&text, candidates)
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawRecommendation {
    referee_id: String,
    score: f32,
    #[serde(default)]
    reasoning: String,
}

/// Reads the model's ranking out of `text`, tolerating prose, bracketed
/// asides or code fences around it. The first JSON array holding at least one
/// well-formed entry wins; elements that do not parse are skipped.
pub fn parse_ranking(
    text: &str,
    candidates: &[Referee],
) -> Result<Vec<MatchRecommendation>, AssistantError> {
    let mut found_array = false;

    for (start, _) in text.match_indices('[') {
        let Some(Ok(values)) = serde_json::Deserializer::from_str(&text[start..])
            .into_iter::<Vec<serde_json::Value>>()
            .next()
        else {
            continue;
        };
        found_array = true;

        let raw: Vec<MatchRecommendation> = values
            .into_iter()
            .filter_map(|value| serde_json::from_value::<RawRecommendation>(value).ok())
            .map(|raw| MatchRecommendation::new(RefereeId::new(raw.referee_id), raw.score, raw.reasoning))
            .collect();

        if !raw.is_empty() {
            let known: Vec<RefereeId> = candidates.iter().map(|referee| referee.id.clone()).collect();

            return Ok(normalize_recommendations(raw, &known));
        }
    }

    if found_array {
        Ok(Vec::new())
    } else {
        Err(AssistantError::Malformed("no JSON array in response".to_string()))
    }
}
