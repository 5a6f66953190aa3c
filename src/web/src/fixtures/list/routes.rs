use crate::AppData;
use axum::Router;
use axum::routing::{get, post};

pub fn routes() -> Router<AppData> {
    Router::new()
        .route(
            "/api/fixtures",
            get(super::fixture_list_action).post(super::fixture_create_action),
        )
        .route("/api/fixtures/stats", get(super::fixture_stats_action))
        .route("/api/fixtures/complete", post(super::fixture_complete_action))
}
