//! Author queries

use sqlx::SqliteConnection;

use crate::{
    error::{AppError, AppResult},
    models::Author,
};

/// Look up an author by exact name. The oldest row wins if the name
/// was ever stored twice.
pub async fn find_by_name(conn: &mut SqliteConnection, name: &str) -> AppResult<Option<Author>> {
    let author = sqlx::query_as::<_, Author>(
        "SELECT id, name FROM author WHERE name = ? ORDER BY id LIMIT 1",
    )
    .bind(name)
    .fetch_optional(&mut *conn)
    .await?;
    Ok(author)
}

/// Return the id of the author called `name`, inserting it if new.
///
/// The existence check and the insert are one statement, so two requests
/// registering the same new author cannot both create it.
pub async fn find_or_create(conn: &mut SqliteConnection, name: &str) -> AppResult<i64> {
    let created = sqlx::query_as::<_, Author>(
        r#"
        INSERT INTO author (name)
        SELECT ? WHERE NOT EXISTS (SELECT 1 FROM author WHERE name = ?)
        RETURNING id, name
        "#,
    )
    .bind(name)
    .bind(name)
    .fetch_optional(&mut *conn)
    .await?;

    if let Some(author) = created {
        tracing::debug!("Created author id={} name={:?}", author.id, author.name);
        return Ok(author.id);
    }

    let existing = find_by_name(conn, name)
        .await?
        .ok_or_else(|| AppError::Internal(format!("Author {:?} vanished after lookup", name)))?;
    tracing::debug!("Reusing author id={} name={:?}", existing.id, existing.name);
    Ok(existing.id)
}
