use crate::AppData;
use axum::Router;
use axum::routing::{get, post};

pub fn routes() -> Router<AppData> {
    Router::new()
        .route(
            "/api/fixtures/{fixture_id}/recommendations",
            get(super::recommendations_get_action).post(super::recommendations_request_action),
        )
        .route(
            "/api/fixtures/{fixture_id}/assignment",
            post(super::assignment_create_action),
        )
}
