//! Deserializable request bodies and their typed payload conversions.

pub mod recipes;
