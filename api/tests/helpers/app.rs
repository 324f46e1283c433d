use api::auth::{Role, generate_jwt};
use api::routes::routes;
use axum::{Router, response::Response};
use sea_orm::DatabaseConnection;
use serde_json::Value;
use util::{config::AppConfig, state::AppState};

pub const TEST_JWT_SECRET: &str = "test-secret";

/// Router as mounted by the binary, minus the connection-info logging layer.
pub fn make_app(db: DatabaseConnection) -> Router {
    AppConfig::set_jwt_secret(TEST_JWT_SECRET);
    AppConfig::set_jwt_duration_minutes(60);

    Router::new().nest("/api", routes(AppState::new(db)))
}

pub async fn get_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&body).unwrap()
}

pub fn student_token(student_id: &str, name: &str) -> String {
    generate_jwt(student_id, Role::Student, name).unwrap().0
}

pub fn department_token(department_id: i64, name: &str) -> String {
    generate_jwt(department_id.to_string(), Role::Department, name).unwrap().0
}
