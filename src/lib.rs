//! LocalLib Catalog Server
//!
//! A Rust implementation of a small library catalog, exposing form-driven
//! CRUD endpoints for books, authors, genres and physical copies.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod forms;
pub mod models;
pub mod render;
pub mod repository;
pub mod services;
pub mod validation;
pub mod workflow;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
