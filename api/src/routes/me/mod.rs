//! `/me` routes for the signed-in student. Guarded by `allow_student`.

pub mod get;

use axum::{Router, routing::get};
use util::state::AppState;

use get::get_dashboard;

/// - `GET /me/dashboard` → `get_dashboard`
pub fn me_routes() -> Router<AppState> {
    Router::new().route("/dashboard", get(get_dashboard))
}
