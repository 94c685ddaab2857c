//! Book queries

use sqlx::SqliteConnection;

use crate::{
    error::{AppError, AppResult},
    models::{Book, BookListing, NewBook},
};

/// Insert a book. Constraint failures come back as
/// [`AppError::IntegrityViolation`].
pub async fn create(conn: &mut SqliteConnection, book: &NewBook<'_>) -> AppResult<Book> {
    sqlx::query_as::<_, Book>(
        r#"
        INSERT INTO book (title, isbn, author_id)
        VALUES (?, ?, ?)
        RETURNING id, title, isbn, author_id
        "#,
    )
    .bind(book.title)
    .bind(book.isbn)
    .bind(book.author_id)
    .fetch_one(&mut *conn)
    .await
    .map_err(AppError::from_write)
}

/// All books with their author's name, in store order
pub async fn list(conn: &mut SqliteConnection) -> AppResult<Vec<BookListing>> {
    let rows = sqlx::query_as::<_, BookListing>(
        r#"
        SELECT b.title, a.name AS author_name, b.isbn
        FROM book b
        INNER JOIN author a ON b.author_id = a.id
        "#,
    )
    .fetch_all(&mut *conn)
    .await?;
    Ok(rows)
}
