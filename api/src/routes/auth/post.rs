use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use services::{DbRecordStore, credential_service::CredentialService};
use util::state::AppState;
use validator::Validate;

use crate::auth::{AuthUser, Role, generate_jwt};
use crate::auth::guards::Empty;
use crate::response::ApiResponse;
use crate::routes::common::{service_error_response, validation_error_response};

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    /// Matriculation number, or the department id as a string.
    pub id: String,
    pub name: String,
    pub role: Role,
    pub token: String,
    pub expires_at: String,
}

fn issue_token(id: String, name: String, role: Role) -> Response {
    match generate_jwt(id.clone(), role, name.clone()) {
        Ok((token, expires_at)) => {
            let body = LoginResponse { id, name, role, token, expires_at };
            (StatusCode::OK, Json(ApiResponse::success(body, "Login successful"))).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "token encoding failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<Empty>::error("Could not issue a session token")),
            )
                .into_response()
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct StudentLoginRequest {
    #[validate(length(min = 1, message = "Matriculation number is required"))]
    pub matriculation_number: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// POST /auth/student/login
///
/// Authenticates a student by matriculation number and issues a JWT.
///
/// ### Request Body
/// ```json
/// {
///   "matriculation_number": "U2021/5570183",
///   "password": "secret"
/// }
/// ```
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": {
///     "id": "U2021/5570183",
///     "name": "Ada Obi",
///     "role": "student",
///     "token": "jwt_token_here",
///     "expires_at": "2025-05-23T11:00:00Z"
///   },
///   "message": "Login successful"
/// }
/// ```
///
/// - `400 Bad Request` (empty fields)
/// - `401 Unauthorized` (unknown student or wrong password; same body for both)
/// ```json
/// {
///   "success": false,
///   "data": null,
///   "message": "Invalid Matriculation Number or Password."
/// }
/// ```
pub async fn student_login(
    State(app_state): State<AppState>,
    Json(req): Json<StudentLoginRequest>,
) -> impl IntoResponse {
    if let Err(errors) = req.validate() {
        return validation_error_response(&errors);
    }

    let store = DbRecordStore::new(app_state.db_clone());
    match CredentialService::verify_student(&store, &req.matriculation_number, &req.password).await {
        Ok(student) => {
            tracing::info!(student_id = %student.student_id, "student logged in");
            issue_token(student.student_id, student.name, Role::Student)
        }
        Err(e) => service_error_response(e),
    }
}

/// The department picked on the login form. Accepts the id as a number or
/// as the string a form select would submit.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum DepartmentField {
    Id(i64),
    Text(String),
}

impl DepartmentField {
    fn as_text(&self) -> String {
        match self {
            DepartmentField::Id(id) => id.to_string(),
            DepartmentField::Text(text) => text.clone(),
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct DepartmentLoginRequest {
    pub department: DepartmentField,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// POST /auth/department/login
///
/// Authenticates a department admin and issues a JWT whose subject is the
/// department id.
///
/// ### Request Body
/// ```json
/// {
///   "department": 1,
///   "password": "secret"
/// }
/// ```
///
/// ### Responses
/// - `200 OK` with the same shape as the student login (`role: "department"`)
/// - `400 Bad Request` (empty password)
/// - `401 Unauthorized`
/// ```json
/// {
///   "success": false,
///   "data": null,
///   "message": "Invalid Department or Password."
/// }
/// ```
pub async fn department_login(
    State(app_state): State<AppState>,
    Json(req): Json<DepartmentLoginRequest>,
) -> impl IntoResponse {
    if let Err(errors) = req.validate() {
        return validation_error_response(&errors);
    }

    let store = DbRecordStore::new(app_state.db_clone());
    match CredentialService::verify_department(&store, &req.department.as_text(), &req.password).await {
        Ok(department) => {
            tracing::info!(department_id = department.id, "department admin logged in");
            issue_token(department.id.to_string(), department.name, Role::Department)
        }
        Err(e) => service_error_response(e),
    }
}

/// POST /auth/logout
///
/// Tokens are stateless, so the client simply discards its token. This
/// endpoint returns a farewell message naming whoever was signed in.
///
/// ### Responses
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": null,
///   "message": "Ada Obi has been logged out."
/// }
/// ```
pub async fn logout(user: Option<AuthUser>) -> impl IntoResponse {
    let message = match user {
        Some(AuthUser(claims)) => match claims.role {
            Role::Student => format!("{} has been logged out.", claims.name),
            Role::Department => format!("{} admin has been logged out.", claims.name),
        },
        None => "You have been logged out.".to_string(),
    };

    (StatusCode::OK, Json(ApiResponse::success(Empty, message)))
}
