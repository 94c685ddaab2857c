//! Library Catalog
//!
//! A small web catalog: a form to register books (title, ISBN, author) with
//! field validation and author deduplication, and a page listing every book.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;
pub mod views;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub services: Arc<services::Services>,
    pub repository: repository::Repository,
}

impl AppState {
    pub fn new(config: &AppConfig, repository: repository::Repository) -> Self {
        let services = services::Services::new(repository.clone(), config.validation.clone());
        Self {
            services: Arc::new(services),
            repository,
        }
    }
}
