pub mod routes;

use crate::fixtures::{FixtureView, owned_fixture};
use crate::referees::RefereeSummary;
use crate::{ApiError, ApiResult, AppData};
use axum::Json;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use domain::{Action, AppState, FixtureId, MatchRecommendation, RefereeId};
use log::info;
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationView {
    pub referee_id: RefereeId,
    pub score: f32,
    pub reasoning: String,
    pub referee: RefereeSummary,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationsResponse {
    pub fixture_id: FixtureId,
    pub searching: bool,
    pub recommendations: Vec<RecommendationView>,
}

impl RecommendationsResponse {
    fn of(state: &AppState, fixture_id: FixtureId) -> Self {
        let recommendations = state
            .recommendations(&fixture_id)
            .unwrap_or_default()
            .iter()
            .filter_map(|rec| joined(state, rec))
            .collect();

        RecommendationsResponse {
            searching: state.is_matching(&fixture_id),
            fixture_id,
            recommendations,
        }
    }
}

fn joined(state: &AppState, rec: &MatchRecommendation) -> Option<RecommendationView> {
    let referee = state.referee(&rec.referee_id)?;

    Some(RecommendationView {
        referee_id: rec.referee_id.clone(),
        score: rec.score,
        reasoning: rec.reasoning.clone(),
        referee: RefereeSummary::from(referee),
    })
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentRequest {
    pub referee_id: RefereeId,
}

pub async fn recommendations_get_action(
    State(state): State<AppData>,
    Path(fixture_id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let fixture_id = FixtureId::from(fixture_id);

    let guard = state.state.read().await;

    owned_fixture(&guard, &fixture_id)?;

    Ok(Json(RecommendationsResponse::of(&guard, fixture_id)))
}

/// Filters the referee pool for the fixture's date and ranks the result.
/// The state lock is released while the ranking runs.
pub async fn recommendations_request_action(
    State(state): State<AppData>,
    Path(fixture_id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let fixture_id = FixtureId::from(fixture_id);

    let (fixture, candidates) = {
        let mut guard = state.state.write().await;

        let next = guard.apply(Action::BeginMatchRequest(fixture_id.clone()))?;
        let candidates = next.eligible_referees(&fixture_id, state.settings.availability)?;
        let fixture = next
            .fixture(&fixture_id)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(format!("fixture {} not found", fixture_id)))?;

        *guard = next;

        (fixture, candidates)
    };

    info!(
        "ranking {} eligible referees for fixture {}",
        candidates.len(),
        fixture_id
    );

    // Ranking and its result run detached so the loading flag is cleared
    // even when the caller disconnects.
    let search = tokio::spawn({
        let state = state.clone();

        async move {
            let recommendations = state.recommender.recommend(&fixture, &candidates).await;

            state
                .update(
                    Action::ReceiveRecommendations {
                        fixture_id: fixture_id.clone(),
                        recommendations,
                    },
                    |next| RecommendationsResponse::of(next, fixture_id),
                )
                .await
        }
    });

    let response = search
        .await
        .map_err(|e| ApiError::InternalError(format!("referee search failed: {}", e)))??;

    Ok(Json(response))
}

pub async fn assignment_create_action(
    State(state): State<AppData>,
    Path(fixture_id): Path<String>,
    Json(request): Json<AssignmentRequest>,
) -> ApiResult<impl IntoResponse> {
    let fixture_id = FixtureId::from(fixture_id);

    let view = state
        .update(
            Action::AssignReferee {
                fixture_id: fixture_id.clone(),
                referee_id: request.referee_id,
            },
            |next| next.fixture(&fixture_id).map(|fixture| FixtureView::of(next, fixture)),
        )
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("fixture {} not found", fixture_id)))?;

    Ok(Json(view))
}
