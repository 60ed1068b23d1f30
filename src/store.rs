//! Connection pool construction. The pool is built once and handed to `AppState`.

use crate::config::Settings;
use crate::error::AppError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

/// True for `sqlite::memory:` style URLs, where every connection is its own database.
pub fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

/// Open a pool for `database_url`, creating the database file if it does not exist.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<SqlitePool, AppError> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    let pool = if is_in_memory(database_url) {
        // One connection that is never recycled, or the data disappears with it.
        SqlitePoolOptions::new()
            .min_connections(1)
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?
    } else {
        SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?
    };
    tracing::info!(database_url = %database_url, "database pool ready");
    Ok(pool)
}

pub async fn connect_with_settings(settings: &Settings) -> Result<SqlitePool, AppError> {
    connect(&settings.database_url, settings.max_connections).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_in_memory_urls() {
        assert!(is_in_memory("sqlite::memory:"));
        assert!(is_in_memory("sqlite://file:bookmarks?mode=memory&cache=shared"));
        assert!(!is_in_memory("sqlite://bookmarks.db"));
    }

    #[tokio::test]
    async fn in_memory_pool_keeps_state_between_queries() {
        let pool = connect("sqlite::memory:", 5).await.unwrap();
        sqlx::query("CREATE TABLE t (x INTEGER)").execute(&pool).await.unwrap();
        sqlx::query("INSERT INTO t (x) VALUES (1)").execute(&pool).await.unwrap();
        let (n,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM t").fetch_one(&pool).await.unwrap();
        assert_eq!(n, 1);
    }
}
