use crate::state::AppState;
use crate::v1::handlers::dashboard::get_dashboard;
use crate::v1::handlers::facilities::{get_facilities, get_snapshot, get_summary, get_top};
use axum::Router;
use axum::routing::get;

pub fn router() -> Router<AppState> {
    Router::<AppState>::new()
        .route("/snapshot", get(get_snapshot))
        .route("/facilities", get(get_facilities))
        .route("/summary", get(get_summary))
        .route("/top", get(get_top))
        .route("/dashboard", get(get_dashboard))
}
