use axum::{Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::get};
use util::state::AppState;

use crate::auth::guards::Empty;
use crate::response::ApiResponse;

pub fn health_routes() -> Router<AppState> {
    Router::new().route("/", get(health_check))
}

/// GET /health
///
/// Liveness plus a round trip to the database, so a server that lost its
/// SQLite file reports unhealthy instead of failing every dashboard call.
///
/// - `200 OK`: `{"success": true, "data": "OK", "message": "Health check passed"}`
/// - `503 Service Unavailable`: the database did not answer a ping
async fn health_check(State(app_state): State<AppState>) -> impl IntoResponse {
    match app_state.db_clone().ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(ApiResponse::success("OK", "Health check passed")),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "health check: database ping failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ApiResponse::<Empty>::error("Database unavailable")),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::health_check;
    use axum::{body::to_bytes, extract::State, http::StatusCode, response::IntoResponse};
    use db::test_utils::setup_test_db;
    use serde_json::Value;
    use util::state::AppState;

    #[tokio::test]
    async fn reports_ok_when_the_database_answers() {
        let state = AppState::new(setup_test_db().await);

        let response = health_check(State(state)).await.into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["data"], "OK");
        assert_eq!(json["message"], "Health check passed");
    }
}
