//! # auth Routes Module
//!
//! ## Structure
//! - `post.rs`: logins and logout
//! - `get.rs`: current principal and the department list
//!
//! `auth_routes()` is nested under `/auth` in the main application.

pub mod post;
pub mod get;

use axum::{
    Router,
    middleware::from_fn,
    routing::{get, post},
};
use util::state::AppState;

use crate::auth::guards::allow_authenticated;
use get::{get_me, list_departments};
use post::{department_login, logout, student_login};

/// Builds the `/auth` route group.
///
/// - `POST /auth/student/login` → `student_login`
/// - `POST /auth/department/login` → `department_login`
/// - `POST /auth/logout` → `logout`
/// - `GET /auth/departments` → `list_departments`
/// - `GET /auth/me` → `get_me` (any valid token)
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/student/login", post(student_login))
        .route("/department/login", post(department_login))
        .route("/logout", post(logout))
        .route("/departments", get(list_departments))
        .route("/me", get(get_me).route_layer(from_fn(allow_authenticated)))
}
