//! Error conversion glue between layers.
//!
//! The domain layer must not depend on service/repository error types, so
//! the conversions live here instead of next to the types themselves.

use crate::domain::types::TypeConstraintError;
use crate::forms::recipes::{CreateRecipeFormError, EditRecipeFormError};
use crate::repository::RepositoryError;
use crate::services::ServiceError;

impl From<TypeConstraintError> for ServiceError {
    fn from(val: TypeConstraintError) -> Self {
        ServiceError::Validation(val.to_string())
    }
}

impl From<TypeConstraintError> for RepositoryError {
    fn from(val: TypeConstraintError) -> Self {
        RepositoryError::Validation(val.to_string())
    }
}

impl From<CreateRecipeFormError> for ServiceError {
    fn from(val: CreateRecipeFormError) -> Self {
        ServiceError::Validation(val.to_string())
    }
}

impl From<EditRecipeFormError> for ServiceError {
    fn from(val: EditRecipeFormError) -> Self {
        ServiceError::Validation(val.to_string())
    }
}
