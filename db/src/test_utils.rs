use chrono::NaiveDate;
use migration::Migrator;
use sea_orm::{Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;

use crate::models::{course, department, department_password, enrollment, semester, student};

pub async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to connect to in-memory db");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

/// Rows created by [`seed_sample_data`].
pub struct SampleData {
    pub computing: department::Model,
    pub maths: department::Model,
    pub first_2023: semester::Model,
    pub second_2023: semester::Model,
    pub first_2024: semester::Model,
    pub csc101: course::Model,
    pub csc102: course::Model,
    pub csc201: course::Model,
    pub seminar: course::Model,
    pub mth101: course::Model,
    /// Graded across three semesters.
    pub ada: student::Model,
    /// Only a zero-credit seminar.
    pub ben: student::Model,
    /// Maths student taking one computing course.
    pub cleo: student::Model,
}

/// Seeds a small, fully known data set.
///
/// `password` is stored verbatim for every student and for the computing
/// department, so callers decide whether it is a hash or a legacy plaintext.
///
/// Expected roll-up for `ada`:
/// - First 2023: CSC101 70 (3cu), CSC102 55 (2cu), MTH101 42 (3cu) → GPA 3.0, attendance 76.67
/// - Second 2023: CSC201 45 (4cu) → GPA 2.0, attendance 60
/// - First 2024: seminar (0cu) → GPA 0, attendance 100
/// - Overall: CGPA 32/12, attendance 78, 5 courses
pub async fn seed_sample_data(db: &DatabaseConnection, password: &str) -> SampleData {
    let computing = department::Model::create(db, "Computer Science").await.expect("department");
    let maths = department::Model::create(db, "Mathematics").await.expect("department");
    department_password::Model::set(db, computing.id, password)
        .await
        .expect("department password");

    let first_2023 = semester::Model::create(
        db,
        "First",
        2023,
        NaiveDate::from_ymd_opt(2023, 1, 9),
        NaiveDate::from_ymd_opt(2023, 5, 26),
    )
    .await
    .expect("semester");
    let second_2023 = semester::Model::create(
        db,
        "Second",
        2023,
        NaiveDate::from_ymd_opt(2023, 6, 5),
        NaiveDate::from_ymd_opt(2023, 10, 27),
    )
    .await
    .expect("semester");
    let first_2024 = semester::Model::create(db, "First", 2024, None, None)
        .await
        .expect("semester");

    let csc101 = course::Model::create(db, "CSC101", "Intro to Computing", 3, computing.id, first_2023.id)
        .await
        .expect("course");
    let csc102 = course::Model::create(db, "CSC102", "Programming I", 2, computing.id, first_2023.id)
        .await
        .expect("course");
    let csc201 = course::Model::create(db, "CSC201", "Data Structures", 4, computing.id, second_2023.id)
        .await
        .expect("course");
    let seminar = course::Model::create(db, "CSC299", "Departmental Seminar", 0, computing.id, first_2024.id)
        .await
        .expect("course");
    let mth101 = course::Model::create(db, "MTH101", "Calculus I", 3, maths.id, first_2023.id)
        .await
        .expect("course");

    let ada = student::Model::create(
        db,
        "U2021/5570183",
        "Ada Obi",
        "ada@example.com",
        Some("08030000001"),
        computing.id,
        Some(password),
    )
    .await
    .expect("student");
    let ben = student::Model::create(db, "U2021/5570184", "Ben Eze", "ben@example.com", None, computing.id, Some(password))
        .await
        .expect("student");
    let cleo = student::Model::create(db, "U2022/1000001", "Cleo Ade", "cleo@example.com", None, maths.id, Some(password))
        .await
        .expect("student");

    let scored = [
        (&ada, &csc101, 10, 20, 50),
        (&ada, &csc102, 8, 15, 40),
        (&ada, &mth101, 5, 12, 30),
        (&ada, &csc201, 6, 10, 35),
        (&ada, &seminar, 10, 30, 60),
        (&ben, &seminar, 10, 30, 70),
        (&cleo, &csc101, 7, 30, 40),
    ];
    for (who, what, attended, ca, exam) in scored {
        let row = enrollment::Model::create(db, who.id, what.id, what.semester_id)
            .await
            .expect("enrollment");
        enrollment::Model::record_attendance(db, row.id, attended)
            .await
            .expect("attendance");
        enrollment::Model::record_scores(db, row.id, ca, exam)
            .await
            .expect("scores");
    }

    SampleData {
        computing,
        maths,
        first_2023,
        second_2023,
        first_2024,
        csc101,
        csc102,
        csc201,
        seminar,
        mth101,
        ada,
        ben,
        cleo,
    }
}
