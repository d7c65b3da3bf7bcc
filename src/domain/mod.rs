//! Persistence-independent domain entities and value objects.

pub mod recipe;
pub mod types;
