use async_trait::async_trait;
use colored::*;
use sea_orm::DatabaseConnection;
use services::ServiceError;
use std::io::{self, Write};
use std::time::Instant;

const STATUS_COLUMN: usize = 80;

/// Password given to every seeded student and department.
pub const DEMO_PASSWORD: &str = "password123";

#[async_trait]
pub trait Seeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<(), ServiceError>;
}

/// Runs one seeder with a `Seeding X ........ done (1.2ms)` status line.
/// Exits the process on the first failure.
pub async fn run_seeder<S: Seeder + ?Sized>(seeder: &S, name: &str, db: &DatabaseConnection) {
    let base_msg = format!("Seeding {}", name.bold());
    let dots = ".".repeat(STATUS_COLUMN.saturating_sub(base_msg.len()));
    print!("{}{} ", base_msg, dots);
    io::stdout().flush().ok();

    let start = Instant::now();
    if let Err(e) = seeder.seed(db).await {
        println!("{}", "failed".red());
        eprintln!("{} {}", "error:".red().bold(), e);
        std::process::exit(1);
    }

    let time_str = format!("({:.2?})", start.elapsed()).dimmed();
    println!("{} {}", "done".green(), time_str);
}
