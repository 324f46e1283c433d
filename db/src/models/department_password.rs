use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;

/// Login credential for a department's administrators (one per department).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "department_passwords")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub department_id: i64,
    pub password: String,
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
}

impl Related<super::department::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Department.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Creates or replaces the credential of a department. `password` is
    /// stored as given; callers hash it first.
    pub async fn set(db: &DbConn, department_id: i64, password: &str) -> Result<Model, DbErr> {
        let active = ActiveModel {
            department_id: Set(department_id),
            password: Set(password.to_owned()),
        };

        match Entity::find_by_id(department_id).one(db).await? {
            Some(_) => active.update(db).await,
            None => active.insert(db).await,
        }
    }

    pub async fn find_by_department(db: &DbConn, department_id: i64) -> Result<Option<Model>, DbErr> {
        Entity::find_by_id(department_id).one(db).await
    }
}
