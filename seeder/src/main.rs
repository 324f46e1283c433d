use crate::seed::{Seeder, run_seeder};
use crate::seeds::{
    course::CourseSeeder, department::DepartmentSeeder, enrollment::EnrollmentSeeder,
    semester::SemesterSeeder, student::StudentSeeder,
};
use colored::*;
use migration::{Migrator, MigratorTrait};

mod seed;
mod seeds;

#[tokio::main]
async fn main() {
    let db = match db::connect().await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("{} could not open database: {}", "error:".red().bold(), e);
            std::process::exit(1);
        }
    };

    if let Err(e) = Migrator::up(&db, None).await {
        eprintln!("{} migrations failed: {}", "error:".red().bold(), e);
        std::process::exit(1);
    }

    for (seeder, name) in [
        (Box::new(DepartmentSeeder) as Box<dyn Seeder + Send + Sync>, "Department"),
        (Box::new(SemesterSeeder), "Semester"),
        (Box::new(CourseSeeder), "Course"),
        (Box::new(StudentSeeder), "Student"),
        (Box::new(EnrollmentSeeder), "Enrollment"),
    ] {
        run_seeder(&*seeder, name, &db).await;
    }
}
