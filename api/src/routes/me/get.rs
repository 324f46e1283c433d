use axum::{
    Extension, Json,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};
use services::{DbRecordStore, performance_service::PerformanceService};
use util::state::AppState;

use crate::auth::AuthUser;
use crate::response::ApiResponse;
use crate::routes::common::service_error_response;

/// GET /me/dashboard
///
/// The signed-in student's performance: per-semester GPA and attendance,
/// overall CGPA, and the chart series.
///
/// ### Responses
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": {
///     "student": { "id": 1, "student_id": "U2021/5570183", "name": "Ada Obi", ... },
///     "department": { "id": 1, "name": "Computer Science" },
///     "semester_summaries": [
///       {
///         "semester": { "id": 1, "name": "First", "academic_year": 2023, ... },
///         "enrollments": [
///           { "course_code": "CSC101", "credit_unit": 3, "total_score": 70, "grade": "A", "grade_point": 5, ... }
///         ],
///         "gpa": 3.0,
///         "average_attendance": 76.67
///       }
///     ],
///     "overall": { "cgpa": 2.67, "average_attendance": 78.0, "total_unique_courses": 5 },
///     "chart_series": [ { "course_code": "CSC101", "total_score": 70.0, "attendance_percentage": 100.0 } ],
///     "is_admin_view": false
///   },
///   "message": "Dashboard retrieved successfully"
/// }
/// ```
/// - `401 Unauthorized` (no token)
/// - `403 Forbidden` (department token)
/// - `404 Not Found` (the student no longer exists)
pub async fn get_dashboard(
    State(app_state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> impl IntoResponse {
    let store = DbRecordStore::new(app_state.db_clone());

    match PerformanceService::my_dashboard(&store, &user.viewer()).await {
        Ok(dashboard) => (
            StatusCode::OK,
            Json(ApiResponse::success(dashboard, "Dashboard retrieved successfully")),
        )
            .into_response(),
        Err(e) => service_error_response(e),
    }
}
