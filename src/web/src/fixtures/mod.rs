pub mod list;
pub mod matching;

use crate::AppData;
use crate::referees::RefereeSummary;
use crate::{ApiError, ApiResult};
use axum::Router;
use domain::{AppState, ClubId, Fixture, FixtureId};
use serde::Serialize;

pub fn fixture_routes() -> Router<AppData> {
    Router::new()
        .merge(list::routes::routes())
        .merge(matching::routes::routes())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FixtureView {
    #[serde(flatten)]
    pub fixture: Fixture,
    pub assigned_referee: Option<RefereeSummary>,
    pub searching: bool,
}

impl FixtureView {
    pub fn of(state: &AppState, fixture: &Fixture) -> Self {
        FixtureView {
            fixture: fixture.clone(),
            assigned_referee: fixture
                .assigned_referee_id()
                .and_then(|id| state.referee(id))
                .map(RefereeSummary::from),
            searching: state.is_matching(&fixture.id),
        }
    }
}

fn signed_in_club(state: &AppState) -> ApiResult<&ClubId> {
    state
        .session()
        .club_id()
        .ok_or_else(|| ApiError::Forbidden("sign in as a club first".to_string()))
}

/// A fixture of the signed-in club, for read-only views.
fn owned_fixture<'a>(state: &'a AppState, fixture_id: &FixtureId) -> ApiResult<&'a Fixture> {
    let club_id = signed_in_club(state)?;

    let fixture = state
        .fixture(fixture_id)
        .ok_or_else(|| ApiError::NotFound(format!("fixture {} not found", fixture_id)))?;

    if &fixture.club_id != club_id {
        return Err(ApiError::Forbidden(format!(
            "fixture {} belongs to another club",
            fixture_id
        )));
    }

    Ok(fixture)
}
