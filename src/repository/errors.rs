use thiserror::Error;

/// Errors surfaced by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Could not obtain a connection from the pool.
    #[error("connection pool error: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),
    /// The store rejected a write because of a unique constraint.
    ///
    /// The `recipes.name` unique index is the authoritative uniqueness
    /// guard; the service-level duplicate lookup is advisory only.
    #[error("unique constraint violation")]
    UniqueViolation,
    /// Any other database error.
    #[error("database error: {0}")]
    Database(diesel::result::Error),
    /// A stored row failed conversion into a domain entity.
    #[error("invalid stored value: {0}")]
    Validation(String),
}

impl From<diesel::result::Error> for RepositoryError {
    fn from(err: diesel::result::Error) -> Self {
        match err {
            diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::UniqueViolation,
                _,
            ) => Self::UniqueViolation,
            other => Self::Database(other),
        }
    }
}

/// Convenient alias for results returned from repository methods.
pub type RepositoryResult<T> = Result<T, RepositoryError>;
