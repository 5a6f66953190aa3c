use crate::AppData;
use axum::Router;
use axum::routing::get;

pub fn routes() -> Router<AppData> {
    Router::new().route("/api/assignments", get(super::assignment_list_action))
}
