use axum::{
    Extension, Json,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};
use db::models::department;
use serde::Serialize;
use services::{DbRecordStore, RecordStore, ServiceError};
use util::state::AppState;

use crate::auth::{AuthUser, Role};
use crate::response::ApiResponse;
use crate::routes::common::service_error_response;

#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub id: String,
    pub name: String,
    pub role: Role,
}

/// GET /auth/me
///
/// Returns the principal behind the bearer token.
///
/// ### Responses
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": { "id": "U2021/5570183", "name": "Ada Obi", "role": "student" },
///   "message": "User data retrieved successfully"
/// }
/// ```
/// - `401 Unauthorized` (missing or invalid token)
pub async fn get_me(Extension(AuthUser(claims)): Extension<AuthUser>) -> impl IntoResponse {
    let body = MeResponse {
        id: claims.sub,
        name: claims.name,
        role: claims.role,
    };
    (StatusCode::OK, Json(ApiResponse::success(body, "User data retrieved successfully")))
}

/// GET /auth/departments
///
/// Lists departments (id and name, alphabetical) for the department login form.
///
/// ### Responses
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": [ { "id": 1, "name": "Computer Science" } ],
///   "message": "Departments retrieved successfully"
/// }
/// ```
pub async fn list_departments(State(app_state): State<AppState>) -> impl IntoResponse {
    let store = DbRecordStore::new(app_state.db_clone());
    match store.list_departments().await {
        Ok(departments) => (
            StatusCode::OK,
            Json(ApiResponse::<Vec<department::Model>>::success(
                departments,
                "Departments retrieved successfully",
            )),
        )
            .into_response(),
        Err(e) => service_error_response(ServiceError::from(e)),
    }
}
