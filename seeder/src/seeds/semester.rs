use crate::seed::Seeder;
use chrono::NaiveDate;
use db::models::semester;
use sea_orm::DatabaseConnection;
use services::ServiceError;

pub struct SemesterSeeder;

#[async_trait::async_trait]
impl Seeder for SemesterSeeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<(), ServiceError> {
        for year in 2022..=2024 {
            semester::Model::create(
                db,
                "First",
                year,
                NaiveDate::from_ymd_opt(year, 1, 9),
                NaiveDate::from_ymd_opt(year, 5, 26),
            )
            .await?;
            semester::Model::create(
                db,
                "Second",
                year,
                NaiveDate::from_ymd_opt(year, 6, 5),
                NaiveDate::from_ymd_opt(year, 10, 27),
            )
            .await?;
        }

        Ok(())
    }
}
