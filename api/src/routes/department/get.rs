use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use services::{DbRecordStore, performance_service::PerformanceService};
use util::state::AppState;

use crate::auth::AuthUser;
use crate::response::ApiResponse;
use crate::routes::common::service_error_response;

/// GET /department/dashboard
///
/// Department-wide figures for the admin's own department.
///
/// ### Responses
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": {
///     "department": { "id": 1, "name": "Computer Science" },
///     "total_students": 2,
///     "total_courses": 4,
///     "average_cgpa": 2.67,
///     "students": [ { "student": { ... }, "cgpa": 2.67, "average_attendance": 78.0 } ],
///     "courses": [ { "course": { "course_code": "CSC101", ... }, "enrolled_students_count": 2 } ]
///   },
///   "message": "Department dashboard retrieved successfully"
/// }
/// ```
/// - `401 Unauthorized` / `403 Forbidden`
/// - `404 Not Found` (department deleted since login)
pub async fn get_dashboard(
    State(app_state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> impl IntoResponse {
    let store = DbRecordStore::new(app_state.db_clone());

    match PerformanceService::department_dashboard(&store, &user.viewer()).await {
        Ok(dashboard) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                dashboard,
                "Department dashboard retrieved successfully",
            )),
        )
            .into_response(),
        Err(e) => service_error_response(e),
    }
}

/// GET /department/students/{*student_id}
///
/// A student's dashboard as seen by a department admin. Same payload as
/// `GET /me/dashboard` with `is_admin_view: true`.
///
/// ### Responses
/// - `200 OK`
/// - `404 Not Found`
/// ```json
/// {
///   "success": false,
///   "data": null,
///   "message": "Student with ID U2021/0000000 not found."
/// }
/// ```
pub async fn get_student_dashboard(
    State(app_state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(student_id): Path<String>,
) -> impl IntoResponse {
    let store = DbRecordStore::new(app_state.db_clone());

    match PerformanceService::student_dashboard_for_admin(&store, &user.viewer(), &student_id).await {
        Ok(dashboard) => (
            StatusCode::OK,
            Json(ApiResponse::success(dashboard, "Student dashboard retrieved successfully")),
        )
            .into_response(),
        Err(e) => service_error_response(e),
    }
}

/// GET /department/reports/{*student_id}
///
/// Printable performance report for one student.
///
/// ### Responses
/// - `200 OK` (same payload as the admin dashboard view)
/// - `404 Not Found`
pub async fn get_student_report(
    State(app_state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(student_id): Path<String>,
) -> impl IntoResponse {
    let store = DbRecordStore::new(app_state.db_clone());

    match PerformanceService::student_report(&store, &user.viewer(), &student_id).await {
        Ok(report) => (
            StatusCode::OK,
            Json(ApiResponse::success(report, "Student report generated successfully")),
        )
            .into_response(),
        Err(e) => service_error_response(e),
    }
}
