use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use db::test_utils::{SampleData, seed_sample_data, setup_test_db};
use serial_test::serial;
use tower::ServiceExt;

use crate::helpers::{department_token, get_json_body, make_app, student_token};

fn get(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {token}"));
    }
    builder.body(Body::empty()).unwrap()
}

async fn app_with_admin() -> (axum::Router, SampleData, String) {
    let db = setup_test_db().await;
    let data = seed_sample_data(&db, "pw").await;
    let app = make_app(db);
    let token = department_token(data.computing.id, "Computer Science");
    (app, data, token)
}

/// Test Case: Department dashboard totals and per-course counts
#[tokio::test]
#[serial]
async fn test_department_dashboard() {
    let (app, _, token) = app_with_admin().await;

    let response = app
        .oneshot(get("/api/department/dashboard", Some(&token)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_json_body(response).await;
    let data = &json["data"];
    assert_eq!(data["department"]["name"], "Computer Science");
    assert_eq!(data["total_students"], 2);
    assert_eq!(data["total_courses"], 4);
    assert!((data["average_cgpa"].as_f64().unwrap() - 32.0 / 12.0).abs() < 1e-9);

    let counts: Vec<(String, u64)> = data["courses"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| {
            (
                c["course"]["course_code"].as_str().unwrap().to_string(),
                c["enrolled_students_count"].as_u64().unwrap(),
            )
        })
        .collect();
    assert_eq!(
        counts,
        [
            ("CSC101".to_string(), 2),
            ("CSC102".to_string(), 1),
            ("CSC201".to_string(), 1),
            ("CSC299".to_string(), 2),
        ]
    );
}

/// Test Case: Guard messages and status codes
#[tokio::test]
#[serial]
async fn test_department_dashboard_access() {
    let (app, _, _) = app_with_admin().await;

    let response = app
        .clone()
        .oneshot(get("/api/department/dashboard", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = get_json_body(response).await;
    assert_eq!(json["message"], "Please log in as a department admin to view this page.");

    let student = student_token("U2021/5570183", "Ada Obi");
    let response = app
        .oneshot(get("/api/department/dashboard", Some(&student)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

/// Test Case: Admin view of a student whose id contains a slash
#[tokio::test]
#[serial]
async fn test_admin_student_view() {
    let (app, _, token) = app_with_admin().await;

    let response = app
        .oneshot(get("/api/department/students/U2021/5570183", Some(&token)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_json_body(response).await;
    assert_eq!(json["data"]["is_admin_view"], true);
    assert_eq!(json["data"]["student"]["name"], "Ada Obi");
    assert_eq!(json["data"]["semester_summaries"].as_array().unwrap().len(), 3);
}

/// Test Case: Unknown student in the admin view
#[tokio::test]
#[serial]
async fn test_admin_student_view_not_found() {
    let (app, _, token) = app_with_admin().await;

    let response = app
        .oneshot(get("/api/department/students/U2021/0000000", Some(&token)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = get_json_body(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Student with ID U2021/0000000 not found.");
}

/// Test Case: Student report
#[tokio::test]
#[serial]
async fn test_student_report() {
    let (app, _, token) = app_with_admin().await;

    let response = app
        .clone()
        .oneshot(get("/api/department/reports/U2021/5570184", Some(&token)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = get_json_body(response).await;
    assert_eq!(json["message"], "Student report generated successfully");
    assert_eq!(json["data"]["student"]["name"], "Ben Eze");
    assert_eq!(json["data"]["overall"]["cgpa"], 0.0);

    let student = student_token("U2021/5570184", "Ben Eze");
    let response = app
        .oneshot(get("/api/department/reports/U2021/5570184", Some(&student)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}
