//! Author model

use serde::Serialize;
use sqlx::FromRow;

/// Author row. Names are matched exactly when books reference them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Author {
    pub id: i64,
    pub name: String,
}
