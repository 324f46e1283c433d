use axum::{
    body::Body as AxumBody,
    http::{Request, StatusCode, header::CONTENT_TYPE},
};
use db::test_utils::{SampleData, seed_sample_data, setup_test_db};
use sea_orm::DatabaseConnection;
use serde_json::{Value, json};
use serial_test::serial;
use services::credential_service::CredentialService;
use tower::ServiceExt;

use crate::helpers::{department_token, get_json_body, make_app, student_token};

async fn seeded(password: &str) -> (DatabaseConnection, SampleData) {
    let db = setup_test_db().await;
    let data = seed_sample_data(&db, password).await;
    (db, data)
}

fn post_json(uri: &str, payload: Value) -> Request<AxumBody> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(AxumBody::from(serde_json::to_vec(&payload).unwrap()))
        .unwrap()
}

fn get_with_token(uri: &str, token: Option<&str>) -> Request<AxumBody> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {token}"));
    }
    builder.body(AxumBody::empty()).unwrap()
}

/// Test Case: Student login with an argon2-hashed password
#[tokio::test]
#[serial]
async fn test_student_login_success() {
    let hash = CredentialService::hash_password("password123").unwrap();
    let (db, _) = seeded(&hash).await;
    let app = make_app(db);

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/auth/student/login",
            json!({"matriculation_number": "U2021/5570183", "password": "password123"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_json_body(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "Login successful");
    assert_eq!(json["data"]["id"], "U2021/5570183");
    assert_eq!(json["data"]["name"], "Ada Obi");
    assert_eq!(json["data"]["role"], "student");
    assert!(json["data"]["expires_at"].as_str().is_some());

    // The issued token works on a protected route.
    let token = json["data"]["token"].as_str().unwrap().to_string();
    let response = app
        .oneshot(get_with_token("/api/auth/me", Some(&token)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = get_json_body(response).await;
    assert_eq!(json["data"]["id"], "U2021/5570183");
    assert_eq!(json["data"]["role"], "student");
}

/// Test Case: Legacy plaintext credentials still log in
#[tokio::test]
#[serial]
async fn test_student_login_legacy_plaintext() {
    let (db, _) = seeded("legacy-pass").await;
    let app = make_app(db);

    let response = app
        .oneshot(post_json(
            "/api/auth/student/login",
            json!({"matriculation_number": "U2021/5570184", "password": "legacy-pass"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

/// Test Case: A plaintext password shaped like `$scheme$rest` still logs in
#[tokio::test]
#[serial]
async fn test_login_with_dollar_prefixed_plaintext() {
    let (db, data) = seeded("$pass$word12").await;
    let app = make_app(db);

    let student = app
        .clone()
        .oneshot(post_json(
            "/api/auth/student/login",
            json!({"matriculation_number": "U2021/5570183", "password": "$pass$word12"}),
        ))
        .await
        .unwrap();
    assert_eq!(student.status(), StatusCode::OK);

    let department = app
        .oneshot(post_json(
            "/api/auth/department/login",
            json!({"department": data.computing.id, "password": "$pass$word12"}),
        ))
        .await
        .unwrap();
    assert_eq!(department.status(), StatusCode::OK);
}

/// Test Case: Unknown student and wrong password look exactly the same
#[tokio::test]
#[serial]
async fn test_student_login_failures_are_indistinguishable() {
    let (db, _) = seeded("pw").await;
    let app = make_app(db);

    let wrong_password = app
        .clone()
        .oneshot(post_json(
            "/api/auth/student/login",
            json!({"matriculation_number": "U2021/5570183", "password": "nope"}),
        ))
        .await
        .unwrap();
    let unknown_student = app
        .oneshot(post_json(
            "/api/auth/student/login",
            json!({"matriculation_number": "U1900/0000000", "password": "pw"}),
        ))
        .await
        .unwrap();

    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_student.status(), StatusCode::UNAUTHORIZED);

    let a = get_json_body(wrong_password).await;
    let b = get_json_body(unknown_student).await;
    assert_eq!(a, b);
    assert_eq!(a["message"], "Invalid Matriculation Number or Password.");
}

/// Test Case: Empty fields fail validation
#[tokio::test]
#[serial]
async fn test_student_login_requires_fields() {
    let (db, _) = seeded("pw").await;
    let app = make_app(db);

    let response = app
        .oneshot(post_json(
            "/api/auth/student/login",
            json!({"matriculation_number": "", "password": ""}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = get_json_body(response).await;
    assert_eq!(json["success"], false);
    let message = json["message"].as_str().unwrap();
    assert!(message.contains("Matriculation number is required"));
    assert!(message.contains("Password is required"));
}

/// Test Case: Department login accepts the id as a number or a string
#[tokio::test]
#[serial]
async fn test_department_login_success() {
    let hash = CredentialService::hash_password("dept-secret").unwrap();
    let (db, data) = seeded(&hash).await;
    let app = make_app(db);

    for department in [json!(data.computing.id), json!(data.computing.id.to_string())] {
        let response = app
            .clone()
            .oneshot(post_json(
                "/api/auth/department/login",
                json!({"department": department, "password": "dept-secret"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = get_json_body(response).await;
        assert_eq!(json["data"]["role"], "department");
        assert_eq!(json["data"]["name"], "Computer Science");
        assert_eq!(json["data"]["id"], data.computing.id.to_string());
    }
}

/// Test Case: Department login failures share one message
#[tokio::test]
#[serial]
async fn test_department_login_failures() {
    let (db, data) = seeded("pw").await;
    let app = make_app(db);

    let attempts = [
        json!({"department": data.computing.id, "password": "wrong"}),
        json!({"department": data.maths.id, "password": "pw"}),
        json!({"department": "not-a-number", "password": "pw"}),
    ];

    for payload in attempts {
        let response = app
            .clone()
            .oneshot(post_json("/api/auth/department/login", payload))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let json = get_json_body(response).await;
        assert_eq!(json["message"], "Invalid Department or Password.");
    }
}

/// Test Case: Department list for the login form
#[tokio::test]
#[serial]
async fn test_list_departments() {
    let (db, _) = seeded("pw").await;
    let app = make_app(db);

    let response = app
        .oneshot(get_with_token("/api/auth/departments", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_json_body(response).await;
    let names: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Computer Science", "Mathematics"]);
}

/// Test Case: /auth/me without a token
#[tokio::test]
#[serial]
async fn test_me_requires_token() {
    let (db, _) = seeded("pw").await;
    let app = make_app(db);

    let response = app
        .oneshot(get_with_token("/api/auth/me", Some("garbage")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Test Case: Logout greets whoever was signed in
#[tokio::test]
#[serial]
async fn test_logout_messages() {
    let (db, data) = seeded("pw").await;
    let app = make_app(db);

    let cases = [
        (Some(student_token("U2021/5570183", "Ada Obi")), "Ada Obi has been logged out."),
        (
            Some(department_token(data.computing.id, "Computer Science")),
            "Computer Science admin has been logged out.",
        ),
        (None, "You have been logged out."),
        (Some("expired-or-bogus".to_string()), "You have been logged out."),
    ];

    for (token, expected) in cases {
        let mut builder = Request::builder().method("POST").uri("/api/auth/logout");
        if let Some(token) = &token {
            builder = builder.header("Authorization", format!("Bearer {token}"));
        }
        let response = app
            .clone()
            .oneshot(builder.body(AxumBody::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = get_json_body(response).await;
        assert_eq!(json["message"], expected);
    }
}
