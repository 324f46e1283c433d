use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use db::test_utils::setup_test_db;
use serial_test::serial;
use tower::ServiceExt;

use crate::helpers::{get_json_body, make_app};

#[tokio::test]
#[serial]
async fn test_health_check() {
    let app = make_app(setup_test_db().await);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/health")
                .method("GET")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = get_json_body(response).await;
    assert_eq!(json["data"], "OK");
}
