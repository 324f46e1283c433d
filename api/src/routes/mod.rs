//! HTTP route entry point for `/api/...`.
//!
//! Route groups:
//! - `/health` → Health check endpoint (public)
//! - `/auth` → Logins, logout, current principal, department list
//! - `/me` → The signed-in student's own dashboard (students only)
//! - `/department` → Department dashboard, student views and reports (department admins only)

use crate::auth::guards::{allow_department, allow_student};
use crate::routes::{
    auth::auth_routes, department::department_routes, health::health_routes, me::me_routes,
};
use axum::{Router, middleware::from_fn};
use util::state::AppState;

pub mod auth;
pub mod common;
pub mod department;
pub mod health;
pub mod me;

/// Builds the complete application router for all HTTP endpoints.
///
/// The state is applied here, so the result can be nested straight into a
/// stateless `Router` under `/api`.
pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .nest("/health", health_routes())
        .nest("/auth", auth_routes())
        .nest("/me", me_routes().route_layer(from_fn(allow_student)))
        .nest(
            "/department",
            department_routes().route_layer(from_fn(allow_department)),
        )
        .with_state(app_state)
}
