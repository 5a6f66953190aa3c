use crate::AppData;
use axum::Router;
use axum::routing::{get, post};

pub fn routes() -> Router<AppData> {
    Router::new()
        .route(
            "/api/session",
            get(super::session_get_action).delete(super::session_delete_action),
        )
        .route("/api/session/club/{club_id}", post(super::session_club_action))
        .route(
            "/api/session/referee/{referee_id}",
            post(super::session_referee_action),
        )
}
