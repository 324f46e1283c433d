use api::auth::{Claims, Role};
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use db::test_utils::{seed_sample_data, setup_test_db};
use jsonwebtoken::{EncodingKey, Header, encode};
use serial_test::serial;
use tower::ServiceExt;

use crate::helpers::{app::TEST_JWT_SECRET, department_token, get_json_body, make_app, student_token};

fn dashboard_request(token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri("/api/me/dashboard");
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {token}"));
    }
    builder.body(Body::empty()).unwrap()
}

fn close(a: &serde_json::Value, b: f64) -> bool {
    (a.as_f64().unwrap() - b).abs() < 1e-9
}

/// Test Case: A student sees their own rolled-up performance
#[tokio::test]
#[serial]
async fn test_student_dashboard() {
    let db = setup_test_db().await;
    seed_sample_data(&db, "pw").await;
    let app = make_app(db);

    let token = student_token("U2021/5570183", "Ada Obi");
    let response = app.oneshot(dashboard_request(Some(&token))).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_json_body(response).await;
    let data = &json["data"];
    assert_eq!(data["is_admin_view"], false);
    assert_eq!(data["student"]["student_id"], "U2021/5570183");
    assert!(data["student"].get("password").is_none());

    let semesters = data["semester_summaries"].as_array().unwrap();
    assert_eq!(semesters.len(), 3);
    assert_eq!(semesters[0]["semester"]["name"], "First");
    assert_eq!(semesters[0]["semester"]["academic_year"], 2023);
    assert!(close(&semesters[0]["gpa"], 3.0));
    assert!(close(&semesters[1]["gpa"], 2.0));

    let first_line = &semesters[0]["enrollments"][0];
    assert_eq!(first_line["course_code"], "CSC101");
    assert_eq!(first_line["total_score"], 70);
    assert_eq!(first_line["grade"], "A");
    assert_eq!(first_line["grade_point"], 5);

    assert!(close(&data["overall"]["cgpa"], 32.0 / 12.0));
    assert!(close(&data["overall"]["average_attendance"], 78.0));
    assert_eq!(data["overall"]["total_unique_courses"], 5);
    assert_eq!(data["chart_series"].as_array().unwrap().len(), 5);
}

/// Test Case: No token
#[tokio::test]
#[serial]
async fn test_student_dashboard_requires_login() {
    let db = setup_test_db().await;
    let app = make_app(db);

    let response = app.oneshot(dashboard_request(None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let json = get_json_body(response).await;
    assert_eq!(json["message"], "Please log in to view your dashboard.");
}

/// Test Case: Department admins are not students
#[tokio::test]
#[serial]
async fn test_student_dashboard_rejects_department_token() {
    let db = setup_test_db().await;
    let data = seed_sample_data(&db, "pw").await;
    let app = make_app(db);

    let token = department_token(data.computing.id, "Computer Science");
    let response = app.oneshot(dashboard_request(Some(&token))).await.unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

/// Test Case: Expired token
#[tokio::test]
#[serial]
async fn test_student_dashboard_rejects_expired_token() {
    let db = setup_test_db().await;
    seed_sample_data(&db, "pw").await;
    let app = make_app(db);

    let claims = Claims {
        sub: "U2021/5570183".into(),
        role: Role::Student,
        name: "Ada Obi".into(),
        exp: (chrono::Utc::now().timestamp() - 3_600) as usize,
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_JWT_SECRET.as_bytes()),
    )
    .unwrap();

    let response = app.oneshot(dashboard_request(Some(&token))).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Test Case: Token outlives the student record
#[tokio::test]
#[serial]
async fn test_student_dashboard_for_deleted_student() {
    let db = setup_test_db().await;
    let data = seed_sample_data(&db, "pw").await;
    db::models::student::Model::delete(&db, data.ada.id).await.unwrap();
    let app = make_app(db);

    let token = student_token("U2021/5570183", "Ada Obi");
    let response = app.oneshot(dashboard_request(Some(&token))).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
