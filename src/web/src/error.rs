use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use domain::ActionError;
use serde_json::json;

/// Error returned by API handlers, rendered as `{"error": msg}`.
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    Conflict(String),
    Forbidden(String),
    InternalError(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
            ApiError::InternalError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

impl From<ActionError> for ApiError {
    fn from(err: ActionError) -> Self {
        let message = err.to_string();

        match err {
            ActionError::ClubNotFound(_)
            | ActionError::RefereeNotFound(_)
            | ActionError::FixtureNotFound(_) => ApiError::NotFound(message),
            ActionError::NotSignedInAsClub
            | ActionError::NotSignedInAsReferee
            | ActionError::NotFixtureOwner(_) => ApiError::Forbidden(message),
            ActionError::FixtureNotOpen(_)
            | ActionError::MatchRequestPending(_)
            | ActionError::Transition(_)
            | ActionError::NotRecommended { .. } => ApiError::Conflict(message),
            ActionError::Registration(_) | ActionError::InvalidClub(_) => {
                ApiError::BadRequest(message)
            }
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
