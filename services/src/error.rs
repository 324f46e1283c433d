use sea_orm::DbErr;

/// Failures surfaced by the services layer. The api crate maps each variant
/// onto a status code; the `Display` text is shown to the user as-is.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("{0}")]
    NotFound(String),

    /// Wrong identifier or password. The message never says which.
    #[error("{0}")]
    InvalidCredential(&'static str),

    #[error("{0}")]
    Unauthenticated(&'static str),

    #[error("Password hashing failed: {0}")]
    Hashing(String),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}
