//! Read access to everything the dashboards aggregate.
//!
//! [`RecordStore`] is the seam between the services and the database so the
//! service functions can be exercised against any backing store.
//! [`DbRecordStore`] is the sea-orm implementation.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use db::models::{course, department, department_password, enrollment, semester, student};
use db::performance::EnrollmentRecord;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Looks a student up by matriculation number.
    async fn find_student(&self, student_id: &str) -> Result<Option<student::Model>, DbErr>;

    async fn find_department(&self, department_id: i64) -> Result<Option<department::Model>, DbErr>;

    /// All departments, by name.
    async fn list_departments(&self) -> Result<Vec<department::Model>, DbErr>;

    /// Every enrollment of one student with its course and semester attached,
    /// ordered by academic year, semester name, then enrollment id.
    async fn list_enrollments_for_student(&self, student_pk: i64) -> Result<Vec<EnrollmentRecord>, DbErr>;

    /// Students of a department (by id) each paired with their enrollments,
    /// in the same order as [`RecordStore::list_enrollments_for_student`].
    async fn list_enrollments_for_department(
        &self,
        department_id: i64,
    ) -> Result<Vec<(student::Model, Vec<EnrollmentRecord>)>, DbErr>;

    /// Courses offered by a department (by course code) each paired with all
    /// of their enrollments, whichever department the student belongs to.
    async fn list_course_enrollments_for_department(
        &self,
        department_id: i64,
    ) -> Result<Vec<(course::Model, Vec<enrollment::Model>)>, DbErr>;

    async fn get_department_credential(&self, department_id: i64) -> Result<Option<String>, DbErr>;

    async fn get_student_credential(&self, student_id: &str) -> Result<Option<String>, DbErr>;
}

#[derive(Clone)]
pub struct DbRecordStore {
    db: DatabaseConnection,
}

impl DbRecordStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Attaches course and semester rows to bare enrollments with one query
    /// per table, then orders the result.
    async fn hydrate(&self, enrollments: Vec<enrollment::Model>) -> Result<Vec<EnrollmentRecord>, DbErr> {
        if enrollments.is_empty() {
            return Ok(Vec::new());
        }

        let course_ids: HashSet<i64> = enrollments.iter().map(|e| e.course_id).collect();
        let semester_ids: HashSet<i64> = enrollments.iter().map(|e| e.semester_id).collect();

        let courses: HashMap<i64, course::Model> = course::Entity::find()
            .filter(course::Column::Id.is_in(course_ids))
            .all(&self.db)
            .await?
            .into_iter()
            .map(|c| (c.id, c))
            .collect();
        let semesters: HashMap<i64, semester::Model> = semester::Entity::find()
            .filter(semester::Column::Id.is_in(semester_ids))
            .all(&self.db)
            .await?
            .into_iter()
            .map(|s| (s.id, s))
            .collect();

        let mut records = Vec::with_capacity(enrollments.len());
        for enrollment in enrollments {
            match (courses.get(&enrollment.course_id), semesters.get(&enrollment.semester_id)) {
                (Some(course), Some(semester)) => records.push(EnrollmentRecord {
                    course: course.clone(),
                    semester: semester.clone(),
                    enrollment,
                }),
                _ => tracing::warn!(
                    enrollment_id = enrollment.id,
                    "enrollment references a missing course or semester; skipped"
                ),
            }
        }

        records.sort_by(|a, b| {
            (a.semester.academic_year, &a.semester.name, a.enrollment.id)
                .cmp(&(b.semester.academic_year, &b.semester.name, b.enrollment.id))
        });
        Ok(records)
    }
}

#[async_trait]
impl RecordStore for DbRecordStore {
    async fn find_student(&self, student_id: &str) -> Result<Option<student::Model>, DbErr> {
        student::Model::find_by_student_id(&self.db, student_id).await
    }

    async fn find_department(&self, department_id: i64) -> Result<Option<department::Model>, DbErr> {
        department::Model::find_by_id(&self.db, department_id).await
    }

    async fn list_departments(&self) -> Result<Vec<department::Model>, DbErr> {
        department::Model::list(&self.db).await
    }

    async fn list_enrollments_for_student(&self, student_pk: i64) -> Result<Vec<EnrollmentRecord>, DbErr> {
        let enrollments = enrollment::Model::list_by_student(&self.db, student_pk).await?;
        self.hydrate(enrollments).await
    }

    async fn list_enrollments_for_department(
        &self,
        department_id: i64,
    ) -> Result<Vec<(student::Model, Vec<EnrollmentRecord>)>, DbErr> {
        let students = student::Model::list_by_department(&self.db, department_id).await?;
        let ids: Vec<i64> = students.iter().map(|s| s.id).collect();
        let records = self
            .hydrate(enrollment::Model::list_by_students(&self.db, &ids).await?)
            .await?;

        let mut by_student: HashMap<i64, Vec<EnrollmentRecord>> = HashMap::new();
        for record in records {
            by_student.entry(record.enrollment.student_id).or_default().push(record);
        }

        Ok(students
            .into_iter()
            .map(|s| {
                let records = by_student.remove(&s.id).unwrap_or_default();
                (s, records)
            })
            .collect())
    }

    async fn list_course_enrollments_for_department(
        &self,
        department_id: i64,
    ) -> Result<Vec<(course::Model, Vec<enrollment::Model>)>, DbErr> {
        let courses = course::Model::list_by_department(&self.db, department_id).await?;
        let ids: Vec<i64> = courses.iter().map(|c| c.id).collect();

        let mut by_course: HashMap<i64, Vec<enrollment::Model>> = HashMap::new();
        for row in enrollment::Model::list_by_courses(&self.db, &ids).await? {
            by_course.entry(row.course_id).or_default().push(row);
        }

        Ok(courses
            .into_iter()
            .map(|c| {
                let rows = by_course.remove(&c.id).unwrap_or_default();
                (c, rows)
            })
            .collect())
    }

    async fn get_department_credential(&self, department_id: i64) -> Result<Option<String>, DbErr> {
        Ok(department_password::Model::find_by_department(&self.db, department_id)
            .await?
            .map(|row| row.password))
    }

    async fn get_student_credential(&self, student_id: &str) -> Result<Option<String>, DbErr> {
        Ok(self.find_student(student_id).await?.and_then(|s| s.password))
    }
}
