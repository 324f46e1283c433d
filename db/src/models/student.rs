use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use sea_orm::QueryOrder;
use serde::{Deserialize, Serialize};

/// Represents a student in the `students` table.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "students")]
pub struct Model {
    /// Primary key ID (auto-incremented).
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Matriculation number, e.g. `U2021/5570183`.
    #[sea_orm(unique)]
    pub student_id: String,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub phone_number: Option<String>,
    pub department_id: i64,
    /// Login credential. Never sent to clients.
    #[serde(skip_serializing, default)]
    pub password: Option<String>,
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

    #[sea_orm(has_many = "super::enrollment::Entity")]
    Enrollment,
}

impl Related<super::department::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Department.def()
    }
}

impl Related<super::enrollment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Enrollment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Inserts a student. `password` is stored as given; callers hash it first.
    pub async fn create(
        db: &DbConn,
        student_id: &str,
        name: &str,
        email: &str,
        phone_number: Option<&str>,
        department_id: i64,
        password: Option<&str>,
    ) -> Result<Model, DbErr> {
        ActiveModel {
            student_id: Set(student_id.trim().to_owned()),
            name: Set(name.to_owned()),
            email: Set(email.to_owned()),
            phone_number: Set(phone_number.map(str::to_owned)),
            department_id: Set(department_id),
            password: Set(password.map(str::to_owned)),
            ..Default::default()
        }
        .insert(db)
        .await
    }

    pub async fn find_by_student_id(db: &DbConn, student_id: &str) -> Result<Option<Model>, DbErr> {
        Entity::find()
            .filter(Column::StudentId.eq(student_id.trim()))
            .one(db)
            .await
    }

    pub async fn list_by_department(db: &DbConn, department_id: i64) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(Column::DepartmentId.eq(department_id))
            .order_by_asc(Column::Id)
            .all(db)
            .await
    }

    pub async fn set_password(db: &DbConn, id: i64, password: &str) -> Result<Model, DbErr> {
        ActiveModel {
            id: Set(id),
            password: Set(Some(password.to_owned())),
            ..Default::default()
        }
        .update(db)
        .await
    }

    pub async fn delete(db: &DbConn, id: i64) -> Result<(), DbErr> {
        Entity::delete_by_id(id).exec(db).await?;
        Ok(())
    }
}
