pub mod grade;
pub mod models;
pub mod performance;
pub mod test_utils;

use sea_orm::{Database, DatabaseConnection, DbErr};
use util::{config, paths};

/// Opens the configured database.
///
/// A plain file path is turned into a SQLite DSN and its parent directory is
/// created first; SQLite won't create intermediate dirs.
pub async fn connect() -> Result<DatabaseConnection, DbErr> {
    let path_or_url = config::database_path();
    if !path_or_url.contains("://") && !path_or_url.starts_with("sqlite:") {
        if let Err(e) = paths::ensure_parent_dir(&path_or_url) {
            tracing::warn!(error = %e, path = %path_or_url, "could not create database directory");
        }
    }

    let url = paths::database_url(&path_or_url);
    tracing::debug!(%url, "connecting to database");
    Database::connect(&url).await
}
