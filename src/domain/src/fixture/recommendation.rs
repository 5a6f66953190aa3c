use crate::shared::RefereeId;
use itertools::Itertools;
use log::debug;
use serde::{Deserialize, Serialize};

pub const MIN_SCORE: f32 = 0.0;
pub const MAX_SCORE: f32 = 100.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRecommendation {
    pub referee_id: RefereeId,
    pub score: f32,
    pub reasoning: String,
}

impl MatchRecommendation {
    pub fn new(referee_id: RefereeId, score: f32, reasoning: impl Into<String>) -> Self {
        MatchRecommendation {
            referee_id,
            score,
            reasoning: reasoning.into(),
        }
    }
}

/// Brings a raw ranking in line with the recommendation contract:
/// only known candidates, one entry per referee (first wins), finite scores
/// clamped to 0..=100, non-blank reasoning, sorted by descending score with
/// ties kept in candidate order.
pub fn normalize_recommendations(
    raw: Vec<MatchRecommendation>,
    candidates: &[RefereeId],
) -> Vec<MatchRecommendation> {
    let received = raw.len();
    let position = |id: &RefereeId| candidates.iter().position(|candidate| candidate == id);

    let mut recommendations: Vec<MatchRecommendation> = raw
        .into_iter()
        .filter(|rec| position(&rec.referee_id).is_some())
        .filter(|rec| rec.score.is_finite() && !rec.reasoning.trim().is_empty())
        .unique_by(|rec| rec.referee_id.clone())
        .map(|mut rec| {
            rec.score = rec.score.clamp(MIN_SCORE, MAX_SCORE);
            rec.reasoning = rec.reasoning.trim().to_string();
            rec
        })
        .collect();

    recommendations.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| position(&a.referee_id).cmp(&position(&b.referee_id)))
    });

    if recommendations.len() != received {
        debug!(
            "recommendations normalized: {} received, {} kept",
            received,
            recommendations.len()
        );
    }

    recommendations
}
