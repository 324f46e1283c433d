use crate::auth::claims::{AuthUser, Role};
use crate::response::ApiResponse;
use axum::{
    Json,
    body::Body,
    extract::FromRequestParts,
    http::{Request, StatusCode},
    middleware::Next,
    response::Response,
};
use services::performance_service::{DEPARTMENT_LOGIN_REQUIRED, STUDENT_LOGIN_REQUIRED};

#[derive(serde::Serialize, Default)]
pub struct Empty;

type GuardError = (StatusCode, Json<ApiResponse<Empty>>);

/// Validates the bearer token and puts the `AuthUser` into request extensions.
async fn extract_and_insert_authuser(
    req: Request<Body>,
    unauthenticated_msg: &str,
) -> Result<(Request<Body>, AuthUser), GuardError> {
    let (mut parts, body) = req.into_parts();
    let user = AuthUser::from_request_parts(&mut parts, &())
        .await
        .map_err(|_| {
            (
                StatusCode::UNAUTHORIZED,
                Json(ApiResponse::error(unauthenticated_msg)),
            )
        })?;

    let mut req = Request::from_parts(parts, body);
    req.extensions_mut().insert(user.clone());
    Ok((req, user))
}

/// Basic guard to ensure the request is authenticated, whatever the role.
pub async fn allow_authenticated(req: Request<Body>, next: Next) -> Result<Response, GuardError> {
    let (req, _user) = extract_and_insert_authuser(req, "Authentication required").await?;

    Ok(next.run(req).await)
}

/// Student-only guard.
pub async fn allow_student(req: Request<Body>, next: Next) -> Result<Response, GuardError> {
    let (req, user) = extract_and_insert_authuser(req, STUDENT_LOGIN_REQUIRED).await?;

    if user.role() != Role::Student {
        return Err((
            StatusCode::FORBIDDEN,
            Json(ApiResponse::error("Student access required")),
        ));
    }

    Ok(next.run(req).await)
}

/// Department-admin-only guard.
pub async fn allow_department(req: Request<Body>, next: Next) -> Result<Response, GuardError> {
    let (req, user) = extract_and_insert_authuser(req, DEPARTMENT_LOGIN_REQUIRED).await?;

    if user.role() != Role::Department {
        return Err((
            StatusCode::FORBIDDEN,
            Json(ApiResponse::error("Department admin access required")),
        ));
    }

    Ok(next.run(req).await)
}
