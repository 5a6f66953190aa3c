use crate::AppData;
use axum::Router;
use axum::routing::get;

pub fn routes() -> Router<AppData> {
    Router::new().route(
        "/api/clubs",
        get(super::club_list_action).post(super::club_create_action),
    )
}
