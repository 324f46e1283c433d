use crate::seed::Seeder;
use crate::seeds::department::DEPARTMENTS;
use db::models::{course, department, semester};
use rand::rngs::StdRng;
use rand::{SeedableRng, seq::SliceRandom};
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};
use services::ServiceError;

const COURSES_PER_SEMESTER: usize = 3;
const TITLES: [&str; 10] = [
    "Foundations",
    "Principles",
    "Methods",
    "Laboratory",
    "Theory",
    "Applications",
    "Analysis",
    "Systems",
    "Modelling",
    "Seminar",
];

pub struct CourseSeeder;

#[async_trait::async_trait]
impl Seeder for CourseSeeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<(), ServiceError> {
        let mut rng = StdRng::from_entropy();
        let credit_options = [1, 2, 3, 4];

        let semesters = semester::Entity::find()
            .order_by_asc(semester::Column::AcademicYear)
            .order_by_asc(semester::Column::StartDate)
            .all(db)
            .await?;

        for dept in department::Model::list(db).await? {
            let prefix = DEPARTMENTS
                .iter()
                .find(|(name, _)| *name == dept.name)
                .map(|(_, prefix)| *prefix)
                .unwrap_or("GEN");

            for (level, semester) in semesters.iter().enumerate() {
                for n in 0..COURSES_PER_SEMESTER {
                    let code = format!("{prefix}{}{:02}", level / 2 + 1, (level % 2) * 10 + n + 1);
                    let title = format!(
                        "{} {}",
                        dept.name,
                        TITLES.choose(&mut rng).copied().unwrap_or("Topics")
                    );
                    let credit_unit = credit_options.choose(&mut rng).copied().unwrap_or(3);

                    course::Model::create(db, &code, &title, credit_unit, dept.id, semester.id).await?;
                }
            }
        }

        Ok(())
    }
}
