use thiserror::Error;

/// Generic error type used by service layer functions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// The request carried missing, malformed or out-of-bounds input.
    #[error("{0}")]
    Validation(String),
    /// Requested recipe was not found.
    #[error("recipe not found")]
    NotFound,
    /// A recipe with the same (case-insensitive) name already exists.
    #[error("a recipe with this name already exists")]
    Conflict,
    /// A store round trip failed or reported zero effect where one was expected.
    #[error("persistence failure")]
    Persistence,
    /// An unexpected internal error occurred.
    #[error("internal error")]
    Internal,
}

/// Convenient alias for results returned from service functions.
pub type ServiceResult<T> = Result<T, ServiceError>;
