//! Bookmark CRUD against SQLite. Each operation is one transaction.

use crate::error::AppError;
use crate::model::{Bookmark, BookmarkCreate, BookmarkRow, BookmarkUpdate};
use sqlx::types::Json;
use sqlx::{SqliteConnection, SqlitePool};

const COLUMNS: &str = "id, name, media_type, bookmark";

pub struct BookmarkService;

impl BookmarkService {
    /// All bookmarks in ascending id order.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Bookmark>, AppError> {
        let sql = format!("SELECT {} FROM bookmarks ORDER BY id", COLUMNS);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, BookmarkRow>(&sql).fetch_all(pool).await?;
        rows.into_iter().map(Bookmark::try_from).collect()
    }

    /// Fetch one bookmark by id. Returns None when absent.
    pub async fn read(pool: &SqlitePool, id: i64) -> Result<Option<Bookmark>, AppError> {
        let mut conn = pool.acquire().await?;
        Self::fetch_one(&mut conn, id).await
    }

    /// Insert one bookmark and return the stored row, including its assigned id.
    pub async fn create(pool: &SqlitePool, body: BookmarkCreate) -> Result<Bookmark, AppError> {
        let sql = format!(
            "INSERT INTO bookmarks (name, media_type, bookmark) VALUES (?, ?, ?) RETURNING {}",
            COLUMNS
        );
        tracing::debug!(sql = %sql, name = %body.name, media_type = %body.media_type, "query");
        let mut tx = pool.begin().await?;
        let row = sqlx::query_as::<_, BookmarkRow>(&sql)
            .bind(body.name)
            .bind(body.media_type.as_str())
            .bind(Json(body.bookmark))
            .fetch_one(&mut *tx)
            .await?;
        let created = Bookmark::try_from(row)?;
        tx.commit().await?;
        tracing::info!(id = created.id, "bookmark created");
        Ok(created)
    }

    /// Apply the present fields of `patch` to bookmark `id` in a single statement.
    /// Absent fields bind as NULL and keep their stored value. Returns None when absent.
    pub async fn update(
        pool: &SqlitePool,
        id: i64,
        patch: BookmarkUpdate,
    ) -> Result<Option<Bookmark>, AppError> {
        let sql = format!(
            "UPDATE bookmarks SET name = COALESCE(?, name), media_type = COALESCE(?, media_type), \
             bookmark = COALESCE(?, bookmark) WHERE id = ? RETURNING {}",
            COLUMNS
        );
        tracing::debug!(sql = %sql, id, "query");
        let mut tx = pool.begin().await?;
        let row = sqlx::query_as::<_, BookmarkRow>(&sql)
            .bind(patch.name)
            .bind(patch.media_type.map(|m| m.as_str()))
            .bind(patch.bookmark.map(Json))
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
        let Some(row) = row else {
            return Ok(None);
        };
        let updated = Bookmark::try_from(row)?;
        tx.commit().await?;
        tracing::info!(id, "bookmark updated");
        Ok(Some(updated))
    }

    /// Hard-delete bookmark `id`. Returns false when absent.
    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, AppError> {
        let sql = "DELETE FROM bookmarks WHERE id = ? RETURNING id";
        tracing::debug!(sql = %sql, id, "query");
        let mut tx = pool.begin().await?;
        let deleted: Option<(i64,)> = sqlx::query_as(sql).bind(id).fetch_optional(&mut *tx).await?;
        tx.commit().await?;
        if deleted.is_some() {
            tracing::info!(id, "bookmark deleted");
        }
        Ok(deleted.is_some())
    }

    async fn fetch_one(conn: &mut SqliteConnection, id: i64) -> Result<Option<Bookmark>, AppError> {
        let sql = format!("SELECT {} FROM bookmarks WHERE id = ?", COLUMNS);
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, BookmarkRow>(&sql)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;
        row.map(Bookmark::try_from).transpose()
    }
}
