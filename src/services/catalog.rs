//! Catalog service: book registration and listing

use crate::{
    config::AuthorNamePolicy,
    error::AppResult,
    models::{Book, BookForm, BookListing, FieldErrors, NewBook},
    repository::{authors, books, Repository},
};

/// Result of a form submission that did not fail at the store level
#[derive(Debug)]
pub enum Registration {
    /// At least one field failed validation; nothing was written.
    Invalid(FieldErrors),
    /// The book was stored, along with its author if the name was new.
    Saved(Book),
}

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
    author_policy: AuthorNamePolicy,
}

impl CatalogService {
    pub fn new(repository: Repository, author_policy: AuthorNamePolicy) -> Self {
        Self { repository, author_policy }
    }

    /// Check a submitted form without touching the store
    pub fn validate(&self, form: &BookForm) -> FieldErrors {
        form.field_errors(self.author_policy)
    }

    /// Validate the form, then store author and book in one transaction.
    ///
    /// A failed book insert rolls the new author back with it. Constraint
    /// failures surface as `AppError::IntegrityViolation`.
    pub async fn register_book(&self, form: &BookForm) -> AppResult<Registration> {
        let errors = self.validate(form);
        if !errors.is_empty() {
            tracing::debug!("Rejected book submission: {:?}", errors);
            return Ok(Registration::Invalid(errors));
        }

        let mut tx = self.repository.begin().await?;
        let author_id = authors::find_or_create(&mut tx, &form.author).await?;
        let book = books::create(
            &mut tx,
            &NewBook {
                title: &form.title,
                isbn: &form.isbn,
                author_id,
            },
        )
        .await?;
        tx.commit().await?;

        tracing::info!("Saved book id={} isbn={} author_id={}", book.id, book.isbn, book.author_id);
        Ok(Registration::Saved(book))
    }

    /// All books with their author's name
    pub async fn list_books(&self) -> AppResult<Vec<BookListing>> {
        let mut conn = self.repository.acquire().await?;
        books::list(&mut conn).await
    }
}
