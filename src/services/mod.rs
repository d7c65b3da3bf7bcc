//! One service function per API operation, generic over repository traits.

pub mod errors;
pub mod recipes;

pub use errors::{ServiceError, ServiceResult};
