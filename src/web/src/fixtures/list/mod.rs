pub mod routes;

use crate::fixtures::{FixtureView, signed_in_club};
use crate::{ApiError, ApiResult, AppData};
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use chrono::Local;
use domain::{Action, FixtureDraft, FixtureStatus};
use serde_json::json;

pub async fn fixture_list_action(State(state): State<AppData>) -> ApiResult<impl IntoResponse> {
    let guard = state.state.read().await;

    let club_id = signed_in_club(&guard)?;

    let fixtures: Vec<FixtureView> = guard
        .club_fixtures(club_id)
        .map(|fixture| FixtureView::of(&guard, fixture))
        .collect();

    Ok(Json(fixtures))
}

pub async fn fixture_create_action(
    State(state): State<AppData>,
    Json(draft): Json<FixtureDraft>,
) -> ApiResult<impl IntoResponse> {
    let fixture = state
        .update(Action::PostFixture(draft), |next| next.fixtures().last().cloned())
        .await?
        .ok_or_else(|| ApiError::InternalError("posted fixture missing".to_string()))?;

    Ok((StatusCode::CREATED, Json(fixture)))
}

pub async fn fixture_stats_action(State(state): State<AppData>) -> ApiResult<impl IntoResponse> {
    let guard = state.state.read().await;

    let club_id = signed_in_club(&guard)?;

    Ok(Json(guard.club_stats(club_id)))
}

/// Completes every matched fixture dated before today.
pub async fn fixture_complete_action(State(state): State<AppData>) -> ApiResult<impl IntoResponse> {
    let today = Local::now().date_naive();

    let completed = |fixtures: &[domain::Fixture]| {
        fixtures
            .iter()
            .filter(|fixture| matches!(fixture.status, FixtureStatus::Completed { .. }))
            .count()
    };

    let mut guard = state.state.write().await;

    let next = guard.apply(Action::CompletePlayedFixtures { today })?;
    let count = completed(next.fixtures()) - completed(guard.fixtures());
    *guard = next;

    Ok(Json(json!({ "completed": count })))
}
