pub mod routes;

pub use routes::routes as referee_routes;

use crate::{ApiError, ApiResult, AppData};
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use chrono::Local;
use domain::{Action, Referee, RefereeId, RegistrationForm, weekday_name};
use serde::Serialize;

/// Public view of a referee. Safeguarding details stay server side.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefereeSummary {
    pub id: RefereeId,
    pub name: String,
    pub badge_level: String,
    pub location: String,
    pub experience_years: u8,
    pub available_days: Vec<&'static str>,
    pub avatar_url: String,
    pub is_minor: bool,
}

impl From<&Referee> for RefereeSummary {
    fn from(referee: &Referee) -> Self {
        RefereeSummary {
            id: referee.id.clone(),
            name: referee.name.clone(),
            badge_level: referee.badge_level.to_string(),
            location: referee.location.clone(),
            experience_years: referee.experience_years,
            available_days: referee.available_days.iter().map(|day| weekday_name(*day)).collect(),
            avatar_url: referee.avatar_url.clone(),
            is_minor: referee.is_minor,
        }
    }
}

pub async fn referee_list_action(State(state): State<AppData>) -> impl IntoResponse {
    let guard = state.state.read().await;

    let referees: Vec<RefereeSummary> = guard.referees().iter().map(RefereeSummary::from).collect();

    Json(referees)
}

/// Registers the submitted form and signs the new referee in.
pub async fn referee_register_action(
    State(state): State<AppData>,
    Json(form): Json<RegistrationForm>,
) -> ApiResult<impl IntoResponse> {
    let today = Local::now().date_naive();

    let referee = state
        .update(Action::RegisterReferee { form, today }, |next| {
            next.referees().last().map(RefereeSummary::from)
        })
        .await?
        .ok_or_else(|| ApiError::InternalError("registered referee missing".to_string()))?;

    Ok((StatusCode::CREATED, Json(referee)))
}
