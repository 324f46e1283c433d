use sea_orm_migration::prelude::*;

use crate::migrations;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(migrations::m202601100001_create_departments::Migration),
            Box::new(migrations::m202601100002_create_semesters::Migration),
            Box::new(migrations::m202601100003_create_students::Migration),
            Box::new(migrations::m202601100004_create_courses::Migration),
            Box::new(migrations::m202601100005_create_enrollments::Migration),
            Box::new(migrations::m202601100006_create_department_passwords::Migration),
        ]
    }
}
