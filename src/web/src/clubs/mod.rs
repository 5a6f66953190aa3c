pub mod routes;

pub use routes::routes as club_routes;

use crate::{ApiError, ApiResult, AppData};
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use domain::{Action, ClubDraft};

pub async fn club_list_action(State(state): State<AppData>) -> impl IntoResponse {
    let guard = state.state.read().await;

    Json(guard.clubs().to_vec())
}

pub async fn club_create_action(
    State(state): State<AppData>,
    Json(draft): Json<ClubDraft>,
) -> ApiResult<impl IntoResponse> {
    let club = state
        .update(Action::RegisterClub(draft), |next| next.clubs().last().cloned())
        .await?
        .ok_or_else(|| ApiError::InternalError("registered club missing".to_string()))?;

    Ok((StatusCode::CREATED, Json(club)))
}
