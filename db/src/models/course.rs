use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use sea_orm::QueryOrder;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub course_code: String,
    pub course_title: String,
    /// Weight in GPA calculations. Only positive values count.
    pub credit_unit: i32,
    pub department_id: i64,
    pub semester_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::department::Entity",
        from = "Column::DepartmentId",
        to = "super::department::Column::Id",
        on_delete = "Cascade"
    )]
    Department,

    #[sea_orm(
        belongs_to = "super::semester::Entity",
        from = "Column::SemesterId",
        to = "super::semester::Column::Id",
        on_delete = "Cascade"
    )]
    Semester,

    #[sea_orm(has_many = "super::enrollment::Entity")]
    Enrollment,
}

impl Related<super::department::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Department.def()
    }
}

impl Related<super::semester::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Semester.def()
    }
}

impl Related<super::enrollment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Enrollment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create(
        db: &DbConn,
        course_code: &str,
        course_title: &str,
        credit_unit: i32,
        department_id: i64,
        semester_id: i64,
    ) -> Result<Model, DbErr> {
        ActiveModel {
            course_code: Set(course_code.trim().to_owned()),
            course_title: Set(course_title.to_owned()),
            credit_unit: Set(credit_unit),
            department_id: Set(department_id),
            semester_id: Set(semester_id),
            ..Default::default()
        }
        .insert(db)
        .await
    }

    /// Courses offered by a department, ordered by course code.
    pub async fn list_by_department(db: &DbConn, department_id: i64) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(Column::DepartmentId.eq(department_id))
            .order_by_asc(Column::CourseCode)
            .all(db)
            .await
    }

    pub async fn delete(db: &DbConn, id: i64) -> Result<(), DbErr> {
        Entity::delete_by_id(id).exec(db).await?;
        Ok(())
    }
}
