//! HTTP handlers and routing

pub mod books;
pub mod health;

use axum::{
    response::Redirect,
    routing::get,
    Router,
};
use tower_http::trace::TraceLayer;

use crate::AppState;

/// Create the application router with all routes
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::to("/form") }))
        .route("/form", get(books::show_form).post(books::submit_form))
        .route("/books", get(books::list_books))
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
