use crate::AppData;
use axum::Router;
use axum::routing::get;

pub fn routes() -> Router<AppData> {
    Router::new().route(
        "/api/referees",
        get(super::referee_list_action).post(super::referee_register_action),
    )
}
