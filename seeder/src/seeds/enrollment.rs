use crate::seed::Seeder;
use db::models::{course, department, enrollment, student};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sea_orm::DatabaseConnection;
use services::ServiceError;

pub struct EnrollmentSeeder;

#[async_trait::async_trait]
impl Seeder for EnrollmentSeeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<(), ServiceError> {
        let mut rng = StdRng::from_entropy();

        for dept in department::Model::list(db).await? {
            let courses = course::Model::list_by_department(db, dept.id).await?;

            for student in student::Model::list_by_department(db, dept.id).await? {
                for course in &courses {
                    // Most students skip the odd elective.
                    if rng.gen_bool(0.15) {
                        continue;
                    }

                    let row = enrollment::Model::create(db, student.id, course.id, course.semester_id).await?;
                    enrollment::Model::record_attendance(db, row.id, rng.gen_range(3..=10)).await?;

                    // Leave a few results unpublished.
                    if rng.gen_bool(0.9) {
                        enrollment::Model::record_scores(
                            db,
                            row.id,
                            rng.gen_range(5..=30),
                            rng.gen_range(15..=70),
                        )
                        .await?;
                    }
                }
            }
        }

        Ok(())
    }
}
