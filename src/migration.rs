//! Table bootstrap. Safe to run on every startup.

use crate::error::AppError;
use crate::model::MediaType;
use sqlx::SqlitePool;

pub const BOOKMARKS_TABLE: &str = "bookmarks";

/// Create the `bookmarks` table if it does not exist. An existing table is left untouched.
pub async fn ensure_tables(pool: &SqlitePool) -> Result<(), AppError> {
    let allowed: Vec<String> = MediaType::ALL
        .iter()
        .map(|m| format!("'{}'", m.as_str()))
        .collect();
    let ddl = format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            media_type TEXT NOT NULL CHECK (media_type IN ({})),
            bookmark TEXT NOT NULL
        )
        "#,
        BOOKMARKS_TABLE,
        allowed.join(", ")
    );
    tracing::debug!(sql = %ddl, "ensure tables");
    sqlx::query(&ddl).execute(pool).await?;
    Ok(())
}
