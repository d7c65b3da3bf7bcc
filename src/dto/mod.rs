//! Serializable response shapes.

pub mod recipes;
