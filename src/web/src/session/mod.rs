pub mod routes;

pub use routes::routes as session_routes;

use crate::{ApiResult, AppData};
use axum::Json;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use domain::{Action, AppState, ClubId, RefereeId, Session};
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    #[serde(flatten)]
    pub session: Session,
    pub name: Option<String>,
}

impl SessionView {
    fn of(state: &AppState) -> Self {
        let session = state.session().clone();
        let name = match &session {
            Session::Guest => None,
            Session::Club(id) => state.club(id).map(|club| club.name.clone()),
            Session::Referee(id) => state.referee(id).map(|referee| referee.name.clone()),
        };

        SessionView { session, name }
    }
}

pub async fn session_get_action(State(state): State<AppData>) -> impl IntoResponse {
    let guard = state.state.read().await;

    Json(SessionView::of(&guard))
}

pub async fn session_club_action(
    State(state): State<AppData>,
    Path(club_id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let view = state
        .update(Action::SignInClub(ClubId::from(club_id)), SessionView::of)
        .await?;

    Ok(Json(view))
}

pub async fn session_referee_action(
    State(state): State<AppData>,
    Path(referee_id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let view = state
        .update(Action::SignInReferee(RefereeId::from(referee_id)), SessionView::of)
        .await?;

    Ok(Json(view))
}

pub async fn session_delete_action(State(state): State<AppData>) -> ApiResult<impl IntoResponse> {
    let view = state.update(Action::SignOut, SessionView::of).await?;

    Ok(Json(view))
}
