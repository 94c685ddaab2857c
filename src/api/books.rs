//! Book registration form and catalog listing

use axum::extract::{rejection::FormRejection, State};
use axum::Form;
use maud::Markup;

use crate::{
    error::{AppError, AppResult},
    models::BookForm,
    services::catalog::Registration,
    views::{self, FormView, NOT_SAVED_NOTICE, SAVED_MESSAGE},
    AppState,
};

/// Empty registration form
pub async fn show_form() -> Markup {
    views::form_page(&FormView::default())
}

/// Validate and store a submitted book, then redisplay the form.
///
/// Every key must be present; a missing one fails the request with 400
/// instead of producing a field error.
pub async fn submit_form(
    State(state): State<AppState>,
    form: Result<Form<BookForm>, FormRejection>,
) -> AppResult<Markup> {
    let Form(form) = form.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

    let view = match state.services.catalog.register_book(&form).await {
        Ok(Registration::Invalid(errors)) => FormView {
            values: form,
            errors,
            ..Default::default()
        },
        Ok(Registration::Saved(_)) => FormView {
            message: Some(SAVED_MESSAGE),
            ..Default::default()
        },
        Err(AppError::IntegrityViolation(reason)) => {
            tracing::warn!("Book not saved: {}", reason);
            FormView {
                values: form,
                notice: Some(NOT_SAVED_NOTICE),
                ..Default::default()
            }
        }
        Err(e) => return Err(e),
    };

    Ok(views::form_page(&view))
}

/// Table of every book with its author
pub async fn list_books(State(state): State<AppState>) -> AppResult<Markup> {
    let books = state.services.catalog.list_books().await?;
    Ok(views::books_page(&books))
}
