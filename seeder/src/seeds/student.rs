use crate::seed::{DEMO_PASSWORD, Seeder};
use db::models::{department, student};
use fake::{Fake, faker::name::en::Name};
use sea_orm::DatabaseConnection;
use services::{ServiceError, credential_service::CredentialService};

const STUDENTS_PER_DEPARTMENT: usize = 10;

pub struct StudentSeeder;

#[async_trait::async_trait]
impl Seeder for StudentSeeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<(), ServiceError> {
        // One hash for everyone keeps seeding fast.
        let hash = CredentialService::hash_password(DEMO_PASSWORD)?;
        let departments = department::Model::list(db).await?;

        // Fixed demo student
        if let Some(first) = departments.first() {
            student::Model::create(
                db,
                "U2021/5570183",
                "Demo Student",
                "demo.student@example.com",
                Some("08030000000"),
                first.id,
                Some(&hash),
            )
            .await?;
        }

        let mut serial = 5_570_200;
        for dept in &departments {
            for _ in 0..STUDENTS_PER_DEPARTMENT {
                serial += 1;
                let intake = 2021 + fastrand::i32(0..3);
                let matric = format!("U{intake}/{serial:07}");
                let name: String = Name().fake();
                let email = format!("u{serial}@students.example.edu");
                let phone = format!("080{:08}", fastrand::u32(..100_000_000));

                student::Model::create(db, &matric, &name, &email, Some(&phone), dept.id, Some(&hash))
                    .await?;
            }
        }

        Ok(())
    }
}
