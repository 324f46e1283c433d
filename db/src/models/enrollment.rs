use chrono::Utc;
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::grade::{self, LetterGrade};

/// A student's registration for one course in one semester.
///
/// Unique per `(student_id, course_id, semester_id)`. Scores stay `None`
/// until they are recorded.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "enrollments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_id: i64,
    pub course_id: i64,
    pub semester_id: i64,
    pub enrollment_date: Date,
    /// Classes attended out of [`grade::CLASSES_PER_COURSE`].
    pub classes_attended: Option<i32>,
    /// Continuous assessment, out of 30.
    pub ca_score: Option<i32>,
    /// Exam, out of 70.
    pub exam_score: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::student::Entity",
        from = "Column::StudentId",
        to = "super::student::Column::Id",
        on_delete = "Cascade"
    )]
    Student,

    #[sea_orm(
        belongs_to = "super::course::Entity",
        from = "Column::CourseId",
        to = "super::course::Column::Id",
        on_delete = "Cascade"
    )]
    Course,

    #[sea_orm(
        belongs_to = "super::semester::Entity",
        from = "Column::SemesterId",
        to = "super::semester::Column::Id",
        on_delete = "Cascade"
    )]
    Semester,
}

impl Related<super::student::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl Related<super::semester::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Semester.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Enrolls a student. Attendance starts at zero and scores unrecorded.
    pub async fn create(
        db: &DbConn,
        student_id: i64,
        course_id: i64,
        semester_id: i64,
    ) -> Result<Model, DbErr> {
        ActiveModel {
            student_id: Set(student_id),
            course_id: Set(course_id),
            semester_id: Set(semester_id),
            enrollment_date: Set(Utc::now().date_naive()),
            classes_attended: Set(Some(0)),
            ca_score: Set(None),
            exam_score: Set(None),
            ..Default::default()
        }
        .insert(db)
        .await
    }

    pub async fn record_scores(
        db: &DbConn,
        id: i64,
        ca_score: i32,
        exam_score: i32,
    ) -> Result<Model, DbErr> {
        ActiveModel {
            id: Set(id),
            ca_score: Set(Some(ca_score)),
            exam_score: Set(Some(exam_score)),
            ..Default::default()
        }
        .update(db)
        .await
    }

    pub async fn record_attendance(
        db: &DbConn,
        id: i64,
        classes_attended: i32,
    ) -> Result<Model, DbErr> {
        ActiveModel {
            id: Set(id),
            classes_attended: Set(Some(classes_attended)),
            ..Default::default()
        }
        .update(db)
        .await
    }

    pub async fn list_by_student(db: &DbConn, student_id: i64) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(Column::StudentId.eq(student_id))
            .all(db)
            .await
    }

    pub async fn list_by_students(db: &DbConn, student_ids: &[i64]) -> Result<Vec<Model>, DbErr> {
        if student_ids.is_empty() {
            return Ok(Vec::new());
        }
        Entity::find()
            .filter(Column::StudentId.is_in(student_ids.iter().copied()))
            .all(db)
            .await
    }

    pub async fn list_by_courses(db: &DbConn, course_ids: &[i64]) -> Result<Vec<Model>, DbErr> {
        if course_ids.is_empty() {
            return Ok(Vec::new());
        }
        Entity::find()
            .filter(Column::CourseId.is_in(course_ids.iter().copied()))
            .all(db)
            .await
    }

    /// `ca_score + exam_score`, or `None` while either part is unrecorded.
    pub fn total_score(&self) -> Option<i64> {
        grade::total_score(self.ca_score, self.exam_score)
    }

    pub fn attendance_percentage(&self) -> f64 {
        grade::attendance_percentage(self.classes_attended)
    }

    pub fn grade(&self) -> LetterGrade {
        grade::letter_grade(self.total_score())
    }

    pub fn grade_point(&self) -> i64 {
        grade::grade_point(self.total_score())
    }
}
