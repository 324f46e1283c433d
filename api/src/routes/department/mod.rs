//! `/department` routes for department admins. Guarded by `allow_department`.
//!
//! Student ids contain `/` (e.g. `U2021/5570183`), so the student routes use
//! a catch-all segment.

pub mod get;

use axum::{Router, routing::get};
use util::state::AppState;

use get::{get_dashboard, get_student_dashboard, get_student_report};

/// - `GET /department/dashboard` → `get_dashboard`
/// - `GET /department/students/{*student_id}` → `get_student_dashboard`
/// - `GET /department/reports/{*student_id}` → `get_student_report`
pub fn department_routes() -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(get_dashboard))
        .route("/students/{*student_id}", get(get_student_dashboard))
        .route("/reports/{*student_id}", get(get_student_report))
}
