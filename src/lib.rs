//! Core library exports for the recipe API service.
//!
//! This crate exposes the domain, models, repository, forms, service and
//! route layers used by the recipe CRUD application. The `data` feature
//! builds only the persistence/domain layers; `server` adds the Actix-web
//! application on top.

pub mod db;
pub mod domain;
pub mod dto;
pub mod error_conversions;
pub mod forms;
pub mod models;
pub mod repository;
#[cfg(feature = "server")]
pub mod routes;
pub mod schema;
pub mod services;
