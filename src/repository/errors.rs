use thiserror::Error;

pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Failures surfaced by the persistence layer.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("entity not found")]
    NotFound,
    #[error("unique constraint violated")]
    Conflict,
    /// A commit-time stock check failed; the surrounding transaction has
    /// been rolled back. Carries the live stock level.
    #[error("insufficient stock for `{name}`: {available} available")]
    InsufficientStock {
        product_id: i32,
        name: String,
        available: i32,
    },
    #[error("connection pool error: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),
    #[error("database error: {0}")]
    Database(diesel::result::Error),
}

impl From<diesel::result::Error> for RepositoryError {
    fn from(err: diesel::result::Error) -> Self {
        use diesel::result::{DatabaseErrorKind, Error};

        match err {
            Error::NotFound => RepositoryError::NotFound,
            Error::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                RepositoryError::Conflict
            }
            other => RepositoryError::Database(other),
        }
    }
}
