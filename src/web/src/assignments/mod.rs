pub mod routes;

pub use routes::routes as assignment_routes;

use crate::{ApiError, ApiResult, AppData};
use axum::Json;
use axum::extract::State;
use axum::response::IntoResponse;
use domain::{Action, ActionError, AppState, Fixture, RefereeId};
use futures::future::join_all;
use log::debug;
use serde::Serialize;
use std::time::Instant;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentView {
    #[serde(flatten)]
    pub fixture: Fixture,
    pub club_name: Option<String>,
    pub brief: Option<String>,
}

fn assignments_of(state: &AppState, referee_id: &RefereeId) -> Vec<AssignmentView> {
    state
        .assignments(referee_id)
        .into_iter()
        .map(|fixture| AssignmentView {
            fixture: fixture.clone(),
            club_name: state.club(&fixture.club_id).map(|club| club.name.clone()),
            brief: state.brief(&fixture.id).map(str::to_string),
        })
        .collect()
}

/// Lists the signed-in referee's matched fixtures. Fixtures without a brief
/// get one written first; each fixture is briefed at most once.
pub async fn assignment_list_action(State(state): State<AppData>) -> ApiResult<impl IntoResponse> {
    let (referee_id, referee_name, claimed) = {
        let mut guard = state.state.write().await;

        let referee_id = guard
            .session()
            .referee_id()
            .cloned()
            .ok_or(ActionError::NotSignedInAsReferee)?;
        let referee_name = guard
            .referee(&referee_id)
            .map(|referee| referee.name.clone())
            .ok_or_else(|| ActionError::RefereeNotFound(referee_id.clone()))?;

        let needed = guard.fixtures_needing_brief(&referee_id);
        let next = guard.apply(Action::ClaimBriefs(needed.clone()))?;

        let claimed: Vec<Fixture> = needed
            .iter()
            .filter_map(|fixture_id| next.fixture(fixture_id).cloned())
            .collect();

        *guard = next;

        (referee_id, referee_name, claimed)
    };

    if !claimed.is_empty() {
        // Detached, so claimed fixtures are always recorded even if the
        // caller disconnects.
        let writing = tokio::spawn(record_briefs(
            state.clone(),
            referee_id.clone(),
            referee_name,
            claimed,
        ));

        writing
            .await
            .map_err(|e| ApiError::InternalError(format!("brief writing failed: {}", e)))??;
    }

    let guard = state.state.read().await;

    Ok(Json(assignments_of(&guard, &referee_id)))
}

async fn record_briefs(
    state: AppData,
    referee_id: RefereeId,
    referee_name: String,
    claimed: Vec<Fixture>,
) -> Result<(), ActionError> {
    let now = Instant::now();

    let briefs = join_all(
        claimed
            .iter()
            .map(|fixture| state.briefs.write(fixture, &referee_name)),
    )
    .await;

    debug!(
        "{} briefs written for referee {} in {} ms",
        briefs.len(),
        referee_id,
        now.elapsed().as_millis()
    );

    let mut guard = state.state.write().await;

    for (fixture, brief) in claimed.into_iter().zip(briefs) {
        let next = guard.apply(Action::RecordBrief {
            fixture_id: fixture.id,
            brief,
        })?;
        *guard = next;
    }

    Ok(())
}
