use crate::seed::{DEMO_PASSWORD, Seeder};
use db::models::{department, department_password};
use sea_orm::DatabaseConnection;
use services::{ServiceError, credential_service::CredentialService};

/// Department name and course code prefix.
pub const DEPARTMENTS: [(&str, &str); 3] = [
    ("Computer Science", "CSC"),
    ("Mathematics", "MTH"),
    ("Physics", "PHY"),
];

pub struct DepartmentSeeder;

#[async_trait::async_trait]
impl Seeder for DepartmentSeeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<(), ServiceError> {
        let hash = CredentialService::hash_password(DEMO_PASSWORD)?;

        for (name, _) in DEPARTMENTS {
            let dept = department::Model::create(db, name).await?;
            department_password::Model::set(db, dept.id, &hash).await?;
        }

        Ok(())
    }
}
