//! Diesel row structs and their conversions to/from domain entities.

pub mod config;
pub mod recipe;
